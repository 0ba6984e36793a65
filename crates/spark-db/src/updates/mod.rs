//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. Nullable columns use
//! `Option<Option<T>>`: `Some(None)` clears the column.

pub mod idea;

use serde::{Deserialize, Deserializer};

/// Deserialize a present field (including `null`) as `Some(..)`, so that a
/// missing field stays `None` through `#[serde(default)]`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
