/// Observable state of a [`FetchController`](super::FetchController).
///
/// Loading, data and error are mutually exclusive, which the enum enforces.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No identifier, nothing requested.
    Idle,
    /// A request for the current identifier is in flight.
    Loading,
    /// The request settled successfully.
    Loaded(T),
    /// The request settled with an error message.
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
