//! # Snapshot Testing Support
//!
//! Utilities for testing the formatter via snapshot assertions and
//! invariant checks.
//!
//! - **`normalize`**: converts formatted blocks to a stable textual [`Snap`]
//!   for `insta` snapshots and the CLI `tree` output
//! - **`invariants`**: runtime checks for formatter correctness (spans in
//!   bounds, inline runs tiling their block, text matching the source)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
