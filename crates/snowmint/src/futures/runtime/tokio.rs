use core::{future::Future, pin::Pin, time::Duration};

use crate::SleepProvider;

/// Waits out an exhausted sequence on Tokio's timer.
///
/// The generator asks for one millisecond, so each pending poll parks the task
/// until the next tick instead of spinning. Used by
/// [`SnowflakeGeneratorAsyncTokioExt`](crate::SnowflakeGeneratorAsyncTokioExt).
pub struct TokioSleep;
impl SleepProvider for TokioSleep {
    type Sleep = tokio::time::Sleep;

    fn sleep_for(dur: Duration) -> Self::Sleep {
        tokio::time::sleep(dur)
    }
}

/// An implementation of [`SleepProvider`] using Tokio's yield.
///
/// Yielding instead of sleeping retries as soon as the scheduler comes back
/// around, at the cost of tighter polling loops. Under heavy concurrency the
/// timer-based [`TokioSleep`] usually burns less CPU.
pub struct TokioYield;
impl SleepProvider for TokioYield {
    /// Tokio's `yield_now()` returns a private future type, so we must use a
    /// boxed `dyn Future` to abstract over it.
    type Sleep = Pin<Box<dyn Future<Output = ()> + Send>>;

    fn sleep_for(_dur: Duration) -> Self::Sleep {
        Box::pin(tokio::task::yield_now())
    }
}
