use std::time::Duration;

use anyhow::bail;
use clap::{Parser, ValueEnum};
use snowmint::{Base32SnowExt, DEFAULT_EPOCH, SnowflakeClassicId, SnowflakeId, SystemClock};

/// Runtime configuration for the `snowmint` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "snowmint",
    version,
    about = "Mint time-ordered 64-bit Snowflake IDs"
)]
pub struct CliArgs {
    /// Data-center ID embedded in every generated ID.
    ///
    /// Must fit the 5-bit data-center field (0..=31).
    ///
    /// Environment variable: `SNOWMINT_DATACENTER_ID`
    #[arg(long, env = "SNOWMINT_DATACENTER_ID", default_value_t = 1)]
    pub datacenter_id: u64,

    /// Machine ID embedded in every generated ID.
    ///
    /// Must fit the 5-bit machine field (0..=31). Two processes sharing a
    /// data-center and machine ID can mint duplicates.
    ///
    /// Environment variable: `SNOWMINT_MACHINE_ID`
    #[arg(long, env = "SNOWMINT_MACHINE_ID", default_value_t = 1)]
    pub machine_id: u64,

    /// Custom epoch in milliseconds since the Unix epoch.
    ///
    /// Changing the epoch of a running deployment breaks ordering against
    /// previously minted IDs.
    ///
    /// Environment variable: `SNOWMINT_EPOCH_MS`
    #[arg(long, env = "SNOWMINT_EPOCH_MS", default_value_t = default_epoch_ms())]
    pub epoch_ms: u64,

    /// Number of IDs to mint.
    ///
    /// Environment variable: `SNOWMINT_COUNT`
    #[arg(short = 'n', long, env = "SNOWMINT_COUNT", default_value_t = 10)]
    pub count: u64,

    /// How each ID is printed.
    ///
    /// Environment variable: `SNOWMINT_FORMAT`
    #[arg(long, env = "SNOWMINT_FORMAT", value_enum, default_value_t = OutputFormat::Decimal)]
    pub format: OutputFormat,

    /// Consecutive clock-regression retries before giving up.
    ///
    /// Each retry waits for as long as the clock lagged.
    ///
    /// Environment variable: `SNOWMINT_CLOCK_RETRIES`
    #[arg(long, env = "SNOWMINT_CLOCK_RETRIES", default_value_t = 3)]
    pub clock_retries: u32,

    /// Log filter directives, e.g. `debug` or `snowmint=trace`.
    ///
    /// Falls back to `RUST_LOG`, then `info`. Logs go to stderr.
    ///
    /// Environment variable: `SNOWMINT_LOG`
    #[arg(long, env = "SNOWMINT_LOG")]
    pub log_filter: Option<String>,
}

/// Output rendering of a minted ID.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Unsigned decimal integer.
    Decimal,
    /// 13-character Crockford Base32.
    Base32,
    /// Decimal followed by the decoded fields.
    Fields,
}

impl OutputFormat {
    pub fn render(self, id: SnowflakeClassicId, clock: &SystemClock) -> String {
        match self {
            Self::Decimal => id.to_string(),
            Self::Base32 => id.encode(),
            Self::Fields => {
                let unix_ms = clock.epoch().as_millis() + u128::from(id.timestamp());
                format!(
                    "{id}\ttimestamp={}\tunix_ms={unix_ms}\tdatacenter_id={}\tmachine_id={}\tsequence={}",
                    id.timestamp(),
                    id.datacenter_id(),
                    id.machine_id(),
                    id.sequence(),
                )
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct MintConfig {
    pub datacenter_id: u64,
    pub machine_id: u64,
    pub clock: SystemClock,
    pub count: u64,
    pub format: OutputFormat,
    pub clock_retries: u32,
    pub log_filter: Option<String>,
}

impl TryFrom<CliArgs> for MintConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let max_datacenter_id = SnowflakeClassicId::max_datacenter_id();
        let max_machine_id = SnowflakeClassicId::max_machine_id();

        if args.count == 0 {
            bail!("SNOWMINT_COUNT must be greater than 0");
        }

        if args.datacenter_id > max_datacenter_id {
            bail!(
                "SNOWMINT_DATACENTER_ID ({}) exceeds the data-center ID space (max = {})",
                args.datacenter_id,
                max_datacenter_id
            );
        }

        if args.machine_id > max_machine_id {
            bail!(
                "SNOWMINT_MACHINE_ID ({}) exceeds the machine ID space (max = {})",
                args.machine_id,
                max_machine_id
            );
        }

        let clock = SystemClock::with_epoch(Duration::from_millis(args.epoch_ms))?;

        Ok(Self {
            datacenter_id: args.datacenter_id,
            machine_id: args.machine_id,
            clock,
            count: args.count,
            format: args.format,
            clock_retries: args.clock_retries,
            log_filter: args.log_filter,
        })
    }
}

fn default_epoch_ms() -> u64 {
    u64::try_from(DEFAULT_EPOCH.as_millis()).unwrap_or(u64::MAX)
}
