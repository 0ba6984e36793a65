//! # spark-core
//!
//! Core types, ID prefixes, and error types for Spark.
//!
//! This crate provides the foundational types shared across all Spark crates:
//! - Entity structs for ideas and AI suggestions
//! - Palette, status, priority, and acceptance enums
//! - ID prefix constants
//! - Cross-cutting error types
//! - The mentor feedback payload exchanged with the language model
//! - Request/response shapes for the HTTP surface

pub mod entities;
pub mod enums;
pub mod errors;
pub mod feedback;
pub mod identity;
pub mod ids;
pub mod responses;
