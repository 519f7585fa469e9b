//! Plain-text presentation of navigation views.
//!
//! Turns a [`View`](crate::navigation::View) into terminal output laid out
//! like the documentation page: section header, item cards with syntax,
//! examples and notes, and the previous/next footer. Code blocks go through
//! a [`Highlighter`] so a real syntax highlighter can be plugged in.

pub(crate) mod highlight;
pub(crate) mod text;

pub use highlight::{Highlighter, PlainHighlighter, normalize_language};
pub use text::{RenderOptions, render_item, render_section_list, render_sidebar, render_view};
