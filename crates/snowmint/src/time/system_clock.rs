use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{ConfigError, ConfigField, DEFAULT_EPOCH, TimeSource};

/// A wall-clock time source anchored to a custom epoch.
///
/// Every reading goes through [`SystemTime::now`], so NTP corrections and
/// manual adjustments are visible to the generator, which reports them as a
/// [`ClockError`] instead of minting an out-of-order ID.
///
/// Readings taken before the epoch saturate to zero.
///
/// [`ClockError`]: crate::ClockError
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemClock {
    epoch_millis: u64,
}

impl Default for SystemClock {
    /// Constructs a clock aligned to [`DEFAULT_EPOCH`].
    fn default() -> Self {
        Self {
            epoch_millis: millis(DEFAULT_EPOCH),
        }
    }
}

impl SystemClock {
    /// Constructs a clock using `epoch` (time since 1970-01-01 UTC) as t = 0.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for [`ConfigField::Epoch`] if the epoch lies
    /// in the future, since every timestamp must be an offset into the past.
    ///
    /// # Example
    ///
    /// ```
    /// use snowmint::{SystemClock, TimeSource, TWITTER_EPOCH};
    ///
    /// let clock = SystemClock::with_epoch(TWITTER_EPOCH)?;
    /// assert!(clock.current_millis() > 0);
    /// # Ok::<(), snowmint::ConfigError>(())
    /// ```
    pub fn with_epoch(epoch: Duration) -> Result<Self, ConfigError> {
        let epoch_millis = millis(epoch);
        ConfigError::check(ConfigField::Epoch, epoch_millis, unix_millis())?;
        Ok(Self { epoch_millis })
    }

    /// Returns the configured epoch.
    pub const fn epoch(&self) -> Duration {
        Duration::from_millis(self.epoch_millis)
    }
}

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        unix_millis().saturating_sub(self.epoch_millis)
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, millis)
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNIX_ORIGIN;

    #[test]
    fn default_clock_counts_from_default_epoch() {
        let clock = SystemClock::default();
        assert_eq!(clock.epoch(), DEFAULT_EPOCH);

        let expected = unix_millis() - millis(DEFAULT_EPOCH);
        let ts = clock.current_millis();
        assert!(ts >= expected && ts - expected < 1_000);
    }

    #[test]
    fn unix_epoch_clock_matches_system_time() {
        let clock = SystemClock::with_epoch(UNIX_ORIGIN).unwrap();
        let before = unix_millis();
        let ts = clock.current_millis();
        let after = unix_millis();
        assert!(before <= ts && ts <= after);
    }

    #[test]
    fn future_epoch_is_rejected() {
        let future = Duration::from_millis(unix_millis() + 3_600_000);
        let err = SystemClock::with_epoch(future).unwrap_err();
        assert_eq!(err.field, ConfigField::Epoch);
        assert_eq!(err.value, millis(future));
    }

    #[test]
    fn readings_do_not_decrease_over_a_short_window() {
        let clock = SystemClock::default();
        let first = clock.current_millis();
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.current_millis() > first);
    }
}
