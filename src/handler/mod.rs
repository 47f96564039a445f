//! What each user action does against the backend, independent of the DOM.
//!
//! Every handler returns what the page should show next; the caller applies
//! it and, on success, re-fetches the whole catalog.

mod activity_loader;
mod outcome;
mod page_sync;
mod signup_handler;
mod unregister_handler;

pub use activity_loader::{load_activities, LOAD_FAILED_MESSAGE};
pub use outcome::ActionOutcome;
pub use page_sync::{signup_and_sync, unregister_and_sync};
pub use signup_handler::{handle_signup, SIGNUP_FAILED_MESSAGE};
pub use unregister_handler::{handle_unregister, UNREGISTER_FAILED_MESSAGE};

/// Shown when a non-success response carries no usable `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";
