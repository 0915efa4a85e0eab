use core::time::Duration;
use std::sync::Arc;

/// Default epoch: Thursday, August 26, 2021 12:20:00 UTC
pub const DEFAULT_EPOCH: Duration = Duration::from_millis(1_629_980_400_000);

/// Twitter epoch: Thursday, November 4, 2010 1:42:54.657 UTC
pub const TWITTER_EPOCH: Duration = Duration::from_millis(1_288_834_974_657);

/// Standard UNIX epoch: Thursday, January 1, 1970 00:00:00 UTC
pub const UNIX_ORIGIN: Duration = Duration::from_millis(0);

/// A trait for time sources that return milliseconds since a fixed epoch.
///
/// This abstraction allows you to plug in the system clock or a mocked time
/// source in tests. Readings are not required to be monotonic; generators
/// detect regressions themselves.
///
/// # Example
///
/// ```
/// use snowmint::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the configured epoch.
    fn current_millis(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}
