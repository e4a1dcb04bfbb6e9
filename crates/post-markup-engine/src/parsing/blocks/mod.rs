//! # Block Phase
//!
//! Line-by-line classification. Unlike CommonMark there is no container
//! stack and no multi-line block: each `\n`-separated line becomes exactly
//! one block, in input order.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`
//! - **`kinds`**: block types owning their prefixes (`Heading`, `BlockQuote`)
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{LineClass, LineClassifier};
pub use types::{BlockKind, BlockNode};
