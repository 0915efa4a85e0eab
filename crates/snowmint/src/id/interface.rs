use core::{fmt, hash::Hash};

use crate::{ConfigError, ConfigField};

/// A trait representing a layout-compatible Snowflake ID.
///
/// This trait abstracts the core behavior of a Snowflake-style ID with
/// separate bit fields for timestamp, data-center ID, machine ID, and
/// sequence, packed into a `u64`.
///
/// Implementations are normally produced by [`define_snowflake_id!`], which
/// checks the layout at compile time.
///
/// # Example
///
/// ```
/// use snowmint::{SnowflakeClassicId, SnowflakeId};
///
/// let id = SnowflakeClassicId::from_components(1000, 3, 2, 1);
/// assert_eq!(id.timestamp(), 1000);
/// assert_eq!(id.datacenter_id(), 3);
/// assert_eq!(id.machine_id(), 2);
/// assert_eq!(id.sequence(), 1);
/// ```
///
/// [`define_snowflake_id!`]: crate::define_snowflake_id
pub trait SnowflakeId:
    Copy + Clone + fmt::Display + fmt::Debug + PartialOrd + Ord + PartialEq + Eq + Hash
{
    /// Returns the timestamp portion of the ID.
    fn timestamp(&self) -> u64;

    /// Returns the maximum possible value for the timestamp field.
    fn max_timestamp() -> u64;

    /// Returns the data-center ID portion of the ID.
    fn datacenter_id(&self) -> u64;

    /// Returns the maximum possible value for the data-center field.
    fn max_datacenter_id() -> u64;

    /// Returns the machine ID portion of the ID.
    fn machine_id(&self) -> u64;

    /// Returns the maximum possible value for the machine field.
    fn max_machine_id() -> u64;

    /// Returns the sequence portion of the ID.
    fn sequence(&self) -> u64;

    /// Returns the maximum possible value for the sequence field.
    fn max_sequence() -> u64;

    /// Constructs a new Snowflake ID from its components.
    fn from_components(timestamp: u64, datacenter_id: u64, machine_id: u64, sequence: u64)
    -> Self;

    /// Converts this type into its raw representation.
    fn to_raw(&self) -> u64;

    /// Converts a raw value into this type without validation.
    fn from_raw(raw: u64) -> Self;

    /// Returns `true` if no reserved bit is set.
    fn is_valid(&self) -> bool;

    /// Returns true if the current sequence value can be incremented.
    fn has_sequence_room(&self) -> bool {
        self.sequence() < Self::max_sequence()
    }

    /// Returns the next sequence value.
    fn next_sequence(&self) -> u64 {
        self.sequence() + 1
    }

    /// Returns a new ID with the sequence incremented.
    fn increment_sequence(&self) -> Self {
        Self::from_components(
            self.timestamp(),
            self.datacenter_id(),
            self.machine_id(),
            self.next_sequence(),
        )
    }

    /// Returns a new ID for a newer timestamp with sequence reset to zero.
    fn rollover_to_timestamp(&self, ts: u64) -> Self {
        Self::from_components(ts, self.datacenter_id(), self.machine_id(), 0)
    }

    /// Validates a data-center/machine pair against this layout's widths.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first field that does not fit.
    fn check_node(datacenter_id: u64, machine_id: u64) -> Result<(), ConfigError> {
        ConfigError::check(
            ConfigField::DatacenterId,
            datacenter_id,
            Self::max_datacenter_id(),
        )?;
        ConfigError::check(ConfigField::MachineId, machine_id, Self::max_machine_id())
    }
}
