//! Name search over the catalog with expand, scroll and timed highlight.
//!
//! `SearchNavigator` is the synchronous state machine
//! (`Idle -> Searching -> Found -> Highlighted -> Idle`); `SearchDriver`
//! runs its timed transitions against a UI `Viewport`.

mod driver;
mod error;
mod navigator;

pub use driver::{
    SearchDriver, SearchHandle, SearchTiming, Viewport, DEFAULT_HIGHLIGHT_WINDOW,
    DEFAULT_SETTLE_DELAY,
};
pub use error::{Result, SearchError};
pub use navigator::{find_form, NavigatorState, SearchNavigator, SearchTarget, SettleOutcome};
