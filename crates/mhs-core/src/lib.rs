//! # mhs-core
//!
//! Core types for the Mergington High School activities service.
//!
//! This crate provides the types shared across the workspace:
//! - Entity structs for activities and enrollments
//! - HTTP response body types

pub mod entities;
pub mod responses;
