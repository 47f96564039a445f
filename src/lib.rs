//! # Activity Signup
//!
//! Browser client for the Mergington High School activities service, plus an
//! optional development backend serving the same API.

pub mod api;
pub mod config;
pub mod handler;
pub mod model;

#[cfg(feature = "yew")]
pub mod app;
#[cfg(feature = "yew")]
pub mod components;
#[cfg(feature = "yew")]
pub mod hooks;
#[cfg(feature = "yew")]
pub mod providers;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "yew")]
pub use app::App;

pub mod prelude {
    pub use crate::api::ActivityService;
    #[cfg(feature = "yew")]
    pub use crate::api::HttpActivityService;
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    pub use crate::handler::{handle_signup, handle_unregister, load_activities, ActionOutcome};
    #[cfg(feature = "yew")]
    pub use crate::hooks::use_activities;
    pub use crate::model::Activity;
    pub use crate::model::ActivityCatalog;
    pub use crate::model::ActivityDetails;
    pub use crate::model::ApiError;
    pub use crate::model::LoadState;
    pub use crate::model::Message;
    pub use crate::model::MessageKind;
    pub use crate::model::ParticipantRef;
    #[cfg(feature = "yew")]
    pub use crate::providers::{ActivitiesContext, ActivitiesProvider};
}
