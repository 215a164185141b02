//! Merge and cleanup stages applied to each channel.

pub mod combiner;
pub mod dedupe;

pub use combiner::{combine, interleave};
pub use dedupe::{dedupe, is_directive};
