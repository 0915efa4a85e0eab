use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    ConfigError, Result, SnowflakeGenerator, SnowflakeId, TimeSource,
    generator::{
        Mutex, MutexGuard, Poll,
        state::{Tick, initial_state, spin_past, tick},
    },
};

/// A lock-based Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// This generator wraps the Snowflake state in an [`Arc<Mutex<_>>`], allowing
/// safe shared use across threads. Reading the clock, checking for regression,
/// advancing the sequence, and (when the sequence is spent) spinning until the
/// next millisecond all happen inside one critical section, so no two callers
/// can interleave their updates.
///
/// Cloning the generator shares the same state: clones are one logical
/// instance and mint from the same sequence.
///
/// ## Features
///
/// - ✅ Thread-safe
/// - ✅ Safely implement any [`SnowflakeId`] layout
///
/// ## Recommended When
/// - Many threads or tasks mint from one (data-center, machine) pair
///
/// ## See Also
/// - [`BasicSnowflakeGenerator`]
///
/// [`BasicSnowflakeGenerator`]: crate::BasicSnowflakeGenerator
pub struct LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource,
{
    #[cfg(feature = "cache-padded")]
    state: Arc<crossbeam_utils::CachePadded<Mutex<ID>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Arc<Mutex<ID>>,
    clock: T,
}

impl<ID, T> LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource,
{
    /// Creates a new [`LockSnowflakeGenerator`] for the given data-center and
    /// machine.
    ///
    /// The state starts at timestamp zero and sequence zero, the "never
    /// generated" sentinel; the first call observes a later timestamp as
    /// long as the clock's epoch lies in the past.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either ID does not fit its field in `ID`'s
    /// layout.
    ///
    /// # Example
    ///
    /// ```
    /// use snowmint::{LockSnowflakeGenerator, SnowflakeClassicId, SystemClock};
    ///
    /// let generator =
    ///     LockSnowflakeGenerator::<SnowflakeClassicId, _>::new(1, 1, SystemClock::default())?;
    /// let id = generator.try_next_id()?;
    /// # Ok::<(), snowmint::Error>(())
    /// ```
    pub fn new(datacenter_id: u64, machine_id: u64, clock: T) -> Result<Self, ConfigError> {
        Self::from_components(0, datacenter_id, machine_id, 0, clock)
    }

    /// Creates a new ID generator from explicit component values.
    ///
    /// This constructor is primarily useful for advanced use cases such as
    /// restoring the last issued timestamp and sequence after a restart.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any component does not fit its field.
    pub fn from_components(
        timestamp: u64,
        datacenter_id: u64,
        machine_id: u64,
        sequence: u64,
        clock: T,
    ) -> Result<Self, ConfigError> {
        let id = initial_state(timestamp, datacenter_id, machine_id, sequence)?;
        Ok(Self {
            #[cfg(feature = "cache-padded")]
            state: Arc::new(crossbeam_utils::CachePadded::new(Mutex::new(id))),
            #[cfg(not(feature = "cache-padded"))]
            state: Arc::new(Mutex::new(id)),
            clock,
        })
    }

    /// The data-center ID embedded in every generated ID.
    pub fn datacenter_id(&self) -> Result<u64> {
        Ok(self.lock()?.datacenter_id())
    }

    /// The machine ID embedded in every generated ID.
    pub fn machine_id(&self) -> Result<u64> {
        Ok(self.lock()?.machine_id())
    }

    /// Generates the next ID, spinning if this millisecond's sequence is
    /// spent.
    ///
    /// # Errors
    ///
    /// - [`Error::ClockMovedBackwards`] if the clock reads earlier than the
    ///   last used timestamp. The state is left unchanged.
    /// - [`Error::TimestampOverflow`] if the reading does not fit the layout's
    ///   timestamp field.
    /// - [`Error::LockPoisoned`] if another thread panicked while holding the
    ///   lock (std mutex only).
    ///
    /// # Example
    ///
    /// ```
    /// use snowmint::{Error, LockSnowflakeGenerator, SnowflakeClassicId, SystemClock};
    ///
    /// let generator =
    ///     LockSnowflakeGenerator::<SnowflakeClassicId, _>::new(0, 3, SystemClock::default())?;
    ///
    /// let id = match generator.try_next_id() {
    ///     Ok(id) => id,
    ///     Err(Error::ClockMovedBackwards(e)) => {
    ///         std::thread::sleep(std::time::Duration::from_millis(e.lagged_by));
    ///         generator.try_next_id()?
    ///     }
    ///     Err(e) => return Err(e),
    /// };
    /// assert_eq!(id.machine_id(), 3);
    /// # Ok::<(), snowmint::Error>(())
    /// ```
    ///
    /// [`Error::ClockMovedBackwards`]: crate::Error::ClockMovedBackwards
    /// [`Error::TimestampOverflow`]: crate::Error::TimestampOverflow
    /// [`Error::LockPoisoned`]: crate::Error
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<ID> {
        let mut state = self.lock()?;
        let now = self.clock.current_millis();

        let id = match tick(*state, now) {
            Tick::Ready(id) => id,
            Tick::Exhausted => {
                let ts = spin_past::<ID, _>(&self.clock, state.timestamp())?;
                state.rollover_to_timestamp(ts)
            }
            Tick::Behind(err) => return Err(err.into()),
            Tick::Overflow(err) => return Err(err.into()),
        };

        *state = id;
        Ok(id)
    }

    /// Attempts to generate the next ID without waiting.
    ///
    /// Returns [`Poll::Pending`] when the sequence for the current millisecond
    /// is exhausted. The lock is released before returning, so callers may
    /// sleep or yield without blocking other threads.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_next_id`].
    ///
    /// # Example
    ///
    /// ```
    /// use snowmint::{LockSnowflakeGenerator, Poll, SnowflakeClassicId, SystemClock};
    ///
    /// let generator =
    ///     LockSnowflakeGenerator::<SnowflakeClassicId, _>::new(0, 0, SystemClock::default())?;
    ///
    /// let id = loop {
    ///     match generator.try_poll_id()? {
    ///         Poll::Ready { id } => break id,
    ///         Poll::Pending { .. } => std::thread::yield_now(),
    ///     }
    /// };
    /// # Ok::<(), snowmint::Error>(())
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_poll_id(&self) -> Result<Poll<ID>> {
        let mut state = self.lock()?;
        let now = self.clock.current_millis();

        match tick(*state, now) {
            Tick::Ready(id) => {
                *state = id;
                Ok(Poll::Ready { id })
            }
            Tick::Exhausted => Ok(Poll::Pending { yield_for: 1 }),
            Tick::Behind(err) => Err(err.into()),
            Tick::Overflow(err) => Err(err.into()),
        }
    }

    #[allow(clippy::unnecessary_wraps)]
    fn lock(&self) -> Result<MutexGuard<'_, ID>> {
        #[cfg(feature = "parking-lot")]
        {
            Ok(self.state.lock())
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            Ok(self.state.lock()?)
        }
    }
}

impl<ID, T> Clone for LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: self.clock.clone(),
        }
    }
}

impl<ID, T> SnowflakeGenerator<ID, T> for LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource,
{
    fn new(datacenter_id: u64, machine_id: u64, clock: T) -> Result<Self, ConfigError> {
        Self::new(datacenter_id, machine_id, clock)
    }

    fn try_next_id(&self) -> Result<ID> {
        self.try_next_id()
    }

    fn try_poll_id(&self) -> Result<Poll<ID>> {
        self.try_poll_id()
    }
}
