use super::ActivityCatalog;

/// What the activity list currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(ActivityCatalog),
    Failed,
}

impl LoadState {
    pub fn catalog(&self) -> Option<&ActivityCatalog> {
        match self {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }
}
