//! Repository modules implementing CRUD operations for Spark entities.
//!
//! Each module adds methods to `SparkService` via `impl SparkService` blocks.

pub mod idea;
pub mod suggestion;
