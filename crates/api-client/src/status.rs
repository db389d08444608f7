use shared_types::AppError;

/// Progress of one request, owned by the view that issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(AppError),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            RequestState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> From<Result<T, AppError>> for RequestState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(v) => RequestState::Ready(v),
            Err(e) => RequestState::Failed(e),
        }
    }
}
