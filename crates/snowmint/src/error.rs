use core::fmt;

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that generation can produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A generator or clock was configured with an out-of-range value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The clock reported a timestamp earlier than the last one used.
    ///
    /// The generator state is left untouched, so retrying once the clock has
    /// caught up resumes normal operation.
    #[error(transparent)]
    ClockMovedBackwards(#[from] ClockError),

    /// The clock read past the largest timestamp the layout can encode.
    ///
    /// No ID is built and the state is left untouched. The epoch is too old
    /// for the layout; retrying will not help.
    #[error(transparent)]
    TimestampOverflow(#[from] TimestampError),

    /// The operation failed because the lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
    #[cfg(not(feature = "parking-lot"))]
    #[error("generator lock poisoned")]
    LockPoisoned,
}

/// The configuration value rejected by a [`ConfigError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigField {
    DatacenterId,
    MachineId,
    /// Only checked when restoring a generator from explicit components.
    Timestamp,
    /// Only checked when restoring a generator from explicit components.
    Sequence,
    /// The epoch lies after the current wall-clock time.
    Epoch,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DatacenterId => "datacenter_id",
            Self::MachineId => "machine_id",
            Self::Timestamp => "timestamp",
            Self::Sequence => "sequence",
            Self::Epoch => "epoch",
        };
        f.write_str(name)
    }
}

/// A construction-time value fell outside the range its layout allows.
///
/// Never produced by ID generation; the caller must reconfigure and
/// reconstruct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{field} {value} out of range (max {max})")]
pub struct ConfigError {
    pub field: ConfigField,
    pub value: u64,
    pub max: u64,
}

impl ConfigError {
    pub(crate) fn check(field: ConfigField, value: u64, max: u64) -> Result<(), Self> {
        if value > max {
            return Err(Self { field, value, max });
        }
        Ok(())
    }
}

/// The clock moved backward relative to the last issued ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("clock moved backwards by {lagged_by} ms")]
pub struct ClockError {
    /// Milliseconds between the last used timestamp and the current reading.
    pub lagged_by: u64,
}

/// A clock reading does not fit the layout's timestamp field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("timestamp {now} exceeds layout maximum {max}")]
pub struct TimestampError {
    pub now: u64,
    pub max: u64,
}

#[cfg(not(feature = "parking-lot"))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
