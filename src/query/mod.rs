//! Read-only catalog queries.

/// Text/series/ownership filtering and deterministic sorting.
pub mod search;
