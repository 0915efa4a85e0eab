use core::{future::Future, time::Duration};

use crate::{Poll, Result, SleepProvider, SnowflakeGenerator, SnowflakeId, TimeSource};

/// Extension trait for asynchronously generating Snowflake IDs.
///
/// The returned future drives [`SnowflakeGenerator::try_poll_id`] and, while
/// the sequence for the current millisecond is exhausted, awaits the given
/// [`SleepProvider`] instead of spinning. The generator's lock is only held
/// inside each poll, never across an await point.
pub trait SnowflakeGeneratorAsyncExt<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource,
{
    /// Returns a future that resolves to the next available Snowflake ID.
    ///
    /// # Errors
    ///
    /// Resolves to the generator's error unchanged, e.g.
    /// [`Error::ClockMovedBackwards`]; the future does not retry on it.
    ///
    /// [`Error::ClockMovedBackwards`]: crate::Error::ClockMovedBackwards
    fn try_next_id_async<S>(&self) -> impl Future<Output = Result<ID>>
    where
        S: SleepProvider;
}

impl<G, ID, T> SnowflakeGeneratorAsyncExt<ID, T> for G
where
    G: SnowflakeGenerator<ID, T>,
    ID: SnowflakeId,
    T: TimeSource,
{
    fn try_next_id_async<S>(&self) -> impl Future<Output = Result<ID>>
    where
        S: SleepProvider,
    {
        async {
            loop {
                let dur = match self.try_poll_id()? {
                    Poll::Ready { id } => return Ok(id),
                    Poll::Pending { yield_for } => Duration::from_millis(yield_for),
                };
                S::sleep_for(dur).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::{
        cell::Cell,
        future::{Ready, ready},
        pin::pin,
        sync::atomic::{AtomicUsize, Ordering},
        task::{Context, Waker},
    };

    use super::*;
    use crate::{BasicSnowflakeGenerator, Error, SnowflakeClassicId};

    static SLEEPS: AtomicUsize = AtomicUsize::new(0);

    struct CountingSleep;
    impl SleepProvider for CountingSleep {
        type Sleep = Ready<()>;

        fn sleep_for(dur: Duration) -> Self::Sleep {
            assert_eq!(dur, Duration::from_millis(1));
            SLEEPS.fetch_add(1, Ordering::Relaxed);
            ready(())
        }
    }

    struct SteppingTime(Cell<u64>);
    impl TimeSource for SteppingTime {
        fn current_millis(&self) -> u64 {
            let now = self.0.get();
            self.0.set(now + 1);
            now
        }
    }

    fn block_on<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let core::task::Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn sleeps_while_pending_then_resolves() {
        // Sequence spent at 40; the clock reads 40 once more before moving on.
        let generator = BasicSnowflakeGenerator::<SnowflakeClassicId, _>::from_components(
            40,
            0,
            0,
            SnowflakeClassicId::max_sequence(),
            SteppingTime(Cell::new(40)),
        )
        .unwrap();

        let id = block_on(generator.try_next_id_async::<CountingSleep>()).unwrap();
        assert_eq!(id.timestamp(), 41);
        assert_eq!(id.sequence(), 0);
        assert_eq!(SLEEPS.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn clock_regression_is_returned_unchanged() {
        let generator = BasicSnowflakeGenerator::<SnowflakeClassicId, _>::from_components(
            40,
            0,
            0,
            0,
            SteppingTime(Cell::new(30)),
        )
        .unwrap();

        let err = block_on(generator.try_next_id_async::<CountingSleep>()).unwrap_err();
        assert!(matches!(err, Error::ClockMovedBackwards(e) if e.lagged_by == 10));
    }
}
