use crate::{ConfigError, Poll, Result, SnowflakeId, TimeSource};

/// A minimal interface for generating Snowflake IDs
pub trait SnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource,
{
    /// Creates a new generator, validating the node coordinates.
    fn new(datacenter_id: u64, machine_id: u64, clock: T) -> Result<Self, ConfigError>
    where
        Self: Sized;

    /// Returns the next available ID, waiting out an exhausted sequence.
    fn try_next_id(&self) -> Result<ID>;

    /// A non-blocking version of [`Self::try_next_id`].
    fn try_poll_id(&self) -> Result<Poll<ID>>;
}
