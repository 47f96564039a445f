mod activities_provider;

pub use activities_provider::{ActivitiesContext, ActivitiesProvider, ActivitiesProviderProps};
