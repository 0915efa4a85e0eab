use std::time::Duration;

use snowmint::{Error, SnowflakeGenerator, SnowflakeId, TimeSource};

/// Mints one ID, waiting out clock regressions.
///
/// Each [`Error::ClockMovedBackwards`] is logged and followed by a call to
/// `wait` for the reported lag. After `retries` consecutive regressions the
/// error is returned.
pub fn next_id_with_retry<G, ID, T>(
    generator: &G,
    retries: u32,
    mut wait: impl FnMut(Duration),
) -> Result<ID, Error>
where
    G: SnowflakeGenerator<ID, T>,
    ID: SnowflakeId,
    T: TimeSource,
{
    let mut attempt = 0;
    loop {
        match generator.try_next_id() {
            Err(Error::ClockMovedBackwards(err)) if attempt < retries => {
                attempt += 1;
                tracing::warn!(
                    lagged_by = err.lagged_by,
                    attempt,
                    retries,
                    "clock moved backwards; waiting before retry"
                );
                wait(Duration::from_millis(err.lagged_by));
            }
            result => return result,
        }
    }
}
