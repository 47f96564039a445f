mod activity;
mod activity_catalog;
mod error;
mod load_state;
mod message;
mod participant;
mod response;

pub use activity::{Activity, ActivityDetails};
pub use activity_catalog::ActivityCatalog;
pub use error::ApiError;
pub use load_state::LoadState;
pub use message::{Message, MessageKind};
pub use participant::ParticipantRef;
pub use response::{ErrorResponse, MessageResponse};
