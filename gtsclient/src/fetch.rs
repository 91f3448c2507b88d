use gtscore::error::BackendError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// The cancellation scope of a mounted view.  Every request a view makes
/// runs through its group; aborting the group resolves the outstanding
/// ones (and any later ones) with `BackendError::Aborted`.
#[derive(Clone, Debug, Default)]
pub struct FetchGroup {
    token: CancellationToken,
}

/// A detached handle that aborts the group it was taken from, e.g. from
/// a signal handler while the view is awaiting.
#[derive(Clone, Debug)]
pub struct AbortHandle(CancellationToken);

impl FetchGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn run<F, T>(&self, request: F) -> Result<T, BackendError>
    where
        F: Future<Output = Result<T, BackendError>>,
    {
        if self.token.is_cancelled() {
            return Err(BackendError::Aborted);
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                log::debug!("fetch group aborted with request in flight");
                Err(BackendError::Aborted)
            }
            result = request => result,
        }
    }

    pub fn abort(&self) {
        self.token.cancel();
    }

    pub fn is_aborted(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn handle(&self) -> AbortHandle {
        AbortHandle(self.token.clone())
    }
}

impl AbortHandle {
    pub fn abort(&self) {
        self.0.cancel();
    }
}
