//! Access to the activities backend.

mod endpoints;
#[cfg(feature = "yew")]
mod http;
#[cfg(test)]
pub(crate) mod mock;
mod service;

pub use endpoints::{activities_url, signup_url, unregister_url};
#[cfg(feature = "yew")]
pub use http::HttpActivityService;
pub use service::ActivityService;
