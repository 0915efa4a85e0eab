use core::{future::Future, time::Duration};

/// Abstracts over how an async generator waits out an exhausted sequence.
///
/// This keeps the async extension generic over the runtime: implement it for
/// whatever timer or yield primitive your executor offers.
pub trait SleepProvider {
    /// We require `Send` so that the future can be safely moved across threads
    type Sleep: Future<Output = ()> + Send;

    fn sleep_for(dur: Duration) -> Self::Sleep;
}
