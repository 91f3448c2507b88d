use gtsclient::AbortHandle;
use std::{
    future::Future,
    io,
};

/// Wait for `signal`, abort the view behind `handle`, then wait again.
/// Returns whether the second signal arrived, in which case the caller
/// should exit instead of waiting on whatever still blocks it.
pub async fn abort_on<F, Fut>(handle: AbortHandle, mut signal: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    if signal().await.is_err() {
        return false;
    }
    log::warn!("interrupted; aborting outstanding requests");
    handle.abort();
    signal().await.is_ok()
}
