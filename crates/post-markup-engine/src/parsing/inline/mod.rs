//! # Inline Phase
//!
//! Cursor-based segmentation of a block's content into plain and styled
//! runs. There is no recursion: a styled run's text is never re-parsed.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode`, `InlineKind`
//! - **`kinds`**: inline styles owning their delimiter tokens
//! - **`cursor`**: `Cursor` for byte-wise scanning with absolute positions
//! - **`parser`**: `parse_inline()` entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineKind, InlineNode};
