use core::cmp::Ordering;

use crate::{ClockError, ConfigError, ConfigField, SnowflakeId, TimeSource, TimestampError};

/// Result of comparing the last issued ID against a fresh clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tick<ID> {
    /// The next ID, which becomes the new state.
    Ready(ID),
    /// Same millisecond and no sequence room left.
    Exhausted,
    /// The reading is earlier than the last used timestamp.
    Behind(ClockError),
    /// The reading does not fit the layout's timestamp field.
    Overflow(TimestampError),
}

/// Computes the transition from `last` given the reading `now`.
///
/// Pure: the caller owns the state and commits `Tick::Ready` under its own
/// exclusion discipline.
#[inline]
pub(crate) fn tick<ID: SnowflakeId>(last: ID, now: u64) -> Tick<ID> {
    if now > ID::max_timestamp() {
        return Tick::Overflow(cold_timestamp_overflow::<ID>(now));
    }
    let last_ts = last.timestamp();
    match now.cmp(&last_ts) {
        Ordering::Equal => {
            if last.has_sequence_room() {
                Tick::Ready(last.increment_sequence())
            } else {
                Tick::Exhausted
            }
        }
        Ordering::Greater => Tick::Ready(last.rollover_to_timestamp(now)),
        Ordering::Less => Tick::Behind(cold_clock_behind(now, last_ts)),
    }
}

#[cold]
#[inline(never)]
fn cold_clock_behind(now: u64, last_ts: u64) -> ClockError {
    let lagged_by = last_ts - now;
    #[cfg(feature = "tracing")]
    tracing::warn!(lagged_by, last_ts, now, "clock moved backwards; refusing to mint");
    ClockError { lagged_by }
}

#[cold]
#[inline(never)]
fn cold_timestamp_overflow<ID: SnowflakeId>(now: u64) -> TimestampError {
    let max = ID::max_timestamp();
    #[cfg(feature = "tracing")]
    tracing::error!(now, max, "clock reading exceeds the timestamp field");
    TimestampError { now, max }
}

/// Spins on `clock` until it reads strictly past `last_ts`.
///
/// Readings at or below `last_ts` (including regressions) keep the loop
/// spinning; the sequence for `last_ts` is spent either way. A reading past
/// `ID::max_timestamp()` ends the spin with an error.
pub(crate) fn spin_past<ID: SnowflakeId, T: TimeSource>(
    clock: &T,
    last_ts: u64,
) -> Result<u64, TimestampError> {
    loop {
        let now = clock.current_millis();
        if now > ID::max_timestamp() {
            return Err(cold_timestamp_overflow::<ID>(now));
        }
        if now > last_ts {
            return Ok(now);
        }
        core::hint::spin_loop();
    }
}

/// Builds the initial state of a generator, validating every component.
pub(crate) fn initial_state<ID: SnowflakeId>(
    timestamp: u64,
    datacenter_id: u64,
    machine_id: u64,
    sequence: u64,
) -> Result<ID, ConfigError> {
    ID::check_node(datacenter_id, machine_id)?;
    ConfigError::check(ConfigField::Timestamp, timestamp, ID::max_timestamp())?;
    ConfigError::check(ConfigField::Sequence, sequence, ID::max_sequence())?;
    Ok(ID::from_components(
        timestamp,
        datacenter_id,
        machine_id,
        sequence,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnowflakeClassicId;

    fn id(ts: u64, seq: u64) -> SnowflakeClassicId {
        SnowflakeClassicId::from_components(ts, 1, 2, seq)
    }

    #[test]
    fn same_millisecond_increments_sequence() {
        assert_eq!(tick(id(10, 3), 10), Tick::Ready(id(10, 4)));
    }

    #[test]
    fn new_millisecond_resets_sequence() {
        assert_eq!(tick(id(10, 3), 12), Tick::Ready(id(12, 0)));
    }

    #[test]
    fn full_sequence_is_exhausted() {
        let last = id(10, SnowflakeClassicId::max_sequence());
        assert_eq!(tick(last, 10), Tick::Exhausted);
    }

    #[test]
    fn regression_reports_lag() {
        assert_eq!(
            tick(id(10, 0), 7),
            Tick::Behind(ClockError { lagged_by: 3 })
        );
    }

    #[test]
    fn never_generated_sentinel_rolls_over_on_first_reading() {
        let sentinel: SnowflakeClassicId = initial_state(0, 1, 2, 0).unwrap();
        assert_eq!(tick(sentinel, 1), Tick::Ready(id(1, 0)));
    }

    #[test]
    fn initial_state_validates_components() {
        let err = initial_state::<SnowflakeClassicId>(0, 32, 0, 0).unwrap_err();
        assert_eq!(err.field, ConfigField::DatacenterId);
        let err = initial_state::<SnowflakeClassicId>(0, 0, 32, 0).unwrap_err();
        assert_eq!(err.field, ConfigField::MachineId);
        let err = initial_state::<SnowflakeClassicId>(1 << 41, 0, 0, 0).unwrap_err();
        assert_eq!(err.field, ConfigField::Timestamp);
        let err = initial_state::<SnowflakeClassicId>(0, 0, 0, 4096).unwrap_err();
        assert_eq!(err.field, ConfigField::Sequence);
        assert_eq!(err.max, 4095);
    }

    #[test]
    fn spin_past_skips_stale_readings() {
        struct Ticker(core::cell::Cell<u64>);
        impl TimeSource for Ticker {
            fn current_millis(&self) -> u64 {
                let v = self.0.get();
                self.0.set(v + 1);
                v
            }
        }
        let clock = Ticker(core::cell::Cell::new(5));
        assert_eq!(spin_past::<SnowflakeClassicId, _>(&clock, 8), Ok(9));
    }

    #[test]
    fn reading_past_timestamp_field_overflows() {
        let max = SnowflakeClassicId::max_timestamp();
        assert_eq!(
            tick(id(max, 0), max + 1),
            Tick::Overflow(TimestampError { now: max + 1, max })
        );
        assert_eq!(tick(id(max, 0), max), Tick::Ready(id(max, 1)));
    }
}
