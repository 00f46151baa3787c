use futures::future::LocalBoxFuture;
use std::time::Duration;

/// Time source for the simulated backend.
///
/// The browser implementation lives with the client; tests use [`ManualClock`], which
/// never actually waits.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

#[cfg(test)]
pub use manual::ManualClock;
