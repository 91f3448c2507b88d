use gtscore::error::BackendError;
use crate::app::route::Route;

/// Lifecycle of anything a view loads: it starts out `Loading` and
/// settles exactly once per mount into either an inline error message or
/// the loaded value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Error(String),
    Ready(T),
}

impl<T> ViewState<T> {
    /// Settle a load.  An aborted request leaves the state as it was, as
    /// nobody is around to read the outcome.
    pub fn settle(
        &mut self,
        result: Result<T, BackendError>,
        message: impl FnOnce(&BackendError) -> String,
    ) {
        match result {
            Ok(value) => *self = ViewState::Ready(value),
            Err(e) if e.is_aborted() => log::debug!("load aborted"),
            Err(e) => {
                log::warn!("load failed: {e}");
                *self = ViewState::Error(message(&e));
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Where a successful submission leads, with the confirmation to show
/// once there.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    pub route: Route,
    pub notice: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Navigated(Navigation),
}

impl SubmitState {
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        match self {
            SubmitState::Navigated(navigation) => Some(navigation),
            _ => None,
        }
    }
}
