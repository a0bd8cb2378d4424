//! Event stream and background persistence.

/// Event stream types emitted by the shelf.
pub mod events;
/// Coalescing background writer.
pub mod writer;
