//! # Rendering
//!
//! Maps formatted blocks onto output. Each renderer decides how an
//! [`InlineKind`](crate::InlineKind) looks; the formatter never does.
//!
//! - **`html`**: escaped HTML fragments and standalone pages
//! - **`plain`**: marker-free text and truncated previews for post cards

pub mod html;
pub mod plain;

pub use html::{PageOptions, to_html, to_html_page};
pub use plain::{preview, to_plain_text};
