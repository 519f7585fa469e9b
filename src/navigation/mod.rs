//! Navigation and filter state for one browsing session.
//!
//! A [`Session`] owns the active section, the optional highlighted item and
//! the search query. Every user event is an [`Action`] applied through
//! [`Session::dispatch`]; the derived [`View`] is recomputed on demand.

pub(crate) mod action;
pub(crate) mod session;
pub(crate) mod view;

pub use action::{Action, Direction, ParseActionError};
pub use session::Session;
pub use view::{SectionPosition, View, ViewMode};
