use crate::views::ViewError;

/// Lifecycle of one view-model operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(ViewError),
}

impl RequestState {
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn error(self) -> Option<ViewError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// What the view must do after an operation settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Stay,
    /// Load the resource again; a mutation may have changed more than it returned.
    Refetch,
    /// The token was rejected: sign out and leave for the login page.
    SignedOut,
}
