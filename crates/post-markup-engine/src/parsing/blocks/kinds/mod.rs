//! # Block Kinds
//!
//! Block-specific types that own their line prefixes. The classifier asks
//! these types; it never hardcodes `#` or `>`.

pub mod block_quote;
pub mod heading;

pub use block_quote::BlockQuote;
pub use heading::Heading;
