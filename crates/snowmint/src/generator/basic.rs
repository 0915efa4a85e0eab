use core::cell::Cell;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    ConfigError, Result, SnowflakeGenerator, SnowflakeId, TimeSource,
    generator::{
        Poll,
        state::{Tick, initial_state, spin_past, tick},
    },
};

/// A non-concurrent Snowflake ID generator suitable for single-threaded
/// environments.
///
/// This generator is lightweight and fast, but **not thread-safe**: it is
/// `Send` but not `Sync`. Give each thread or shard its own instance with a
/// distinct (data-center, machine) pair.
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ Safely implement any [`SnowflakeId`] layout
///
/// ## Recommended When
/// - You're in a single-threaded environment (no shared access)
/// - You want the fastest generator
///
/// ## See Also
/// - [`LockSnowflakeGenerator`]
///
/// [`LockSnowflakeGenerator`]: crate::LockSnowflakeGenerator
pub struct BasicSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource,
{
    state: Cell<ID>,
    clock: T,
}

impl<ID, T> BasicSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource,
{
    /// Creates a new [`BasicSnowflakeGenerator`] for the given data-center and
    /// machine, with the timestamp and sequence set to zero.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either ID does not fit its field.
    ///
    /// # Example
    /// ```
    /// use snowmint::{BasicSnowflakeGenerator, SnowflakeClassicId, SystemClock, TWITTER_EPOCH};
    ///
    /// let clock = SystemClock::with_epoch(TWITTER_EPOCH)?;
    /// let generator = BasicSnowflakeGenerator::<SnowflakeClassicId, _>::new(2, 7, clock)?;
    ///
    /// let id = generator.try_next_id()?;
    /// assert_eq!((id.datacenter_id(), id.machine_id()), (2, 7));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(datacenter_id: u64, machine_id: u64, clock: T) -> Result<Self, ConfigError> {
        Self::from_components(0, datacenter_id, machine_id, 0, clock)
    }

    /// Creates a new ID generator from explicit component values.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`].
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
            state: Cell::new(id),
            clock,
        })
    }

    /// The data-center ID embedded in every generated ID.
    pub fn datacenter_id(&self) -> u64 {
        self.state.get().datacenter_id()
    }

    /// The machine ID embedded in every generated ID.
    pub fn machine_id(&self) -> u64 {
        self.state.get().machine_id()
    }

    /// Generates a new ID, spinning if this millisecond's sequence is spent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockMovedBackwards`] if the clock reads earlier than
    /// the last used timestamp, or [`Error::TimestampOverflow`] if the reading
    /// does not fit the layout. The state is left unchanged either way.
    ///
    /// [`Error::ClockMovedBackwards`]: crate::Error::ClockMovedBackwards
    /// [`Error::TimestampOverflow`]: crate::Error::TimestampOverflow
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<ID> {
        let last = self.state.get();
        let id = match tick(last, self.clock.current_millis()) {
            Tick::Ready(id) => id,
            Tick::Exhausted => {
                last.rollover_to_timestamp(spin_past::<ID, _>(&self.clock, last.timestamp())?)
            }
            Tick::Behind(err) => return Err(err.into()),
            Tick::Overflow(err) => return Err(err.into()),
        };
        self.state.set(id);
        Ok(id)
    }

    /// Attempts to generate the next available ID.
    ///
    /// If the sequence for the current millisecond is exhausted, returns
    /// [`Poll::Pending`] without touching the state.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_next_id`].
    ///
    /// # Example
    /// ```
    /// use snowmint::{BasicSnowflakeGenerator, Poll, SnowflakeClassicId, SystemClock};
    ///
    /// let generator =
    ///     BasicSnowflakeGenerator::<SnowflakeClassicId, _>::new(0, 0, SystemClock::default())?;
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
        match tick(self.state.get(), self.clock.current_millis()) {
            Tick::Ready(id) => {
                self.state.set(id);
                Ok(Poll::Ready { id })
            }
            Tick::Exhausted => Ok(Poll::Pending { yield_for: 1 }),
            Tick::Behind(err) => Err(err.into()),
            Tick::Overflow(err) => Err(err.into()),
        }
    }
}

impl<ID, T> SnowflakeGenerator<ID, T> for BasicSnowflakeGenerator<ID, T>
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
