//! Coordination-free, time-ordered 64-bit Snowflake IDs.
//!
//! Every ID packs a millisecond timestamp, a data-center ID, a machine ID and
//! a per-millisecond sequence into a single `u64`:
//!
//! ```text
//!  Bit Index:  63           63 62            22 21              17 16           12 11             0
//!              +--------------+----------------+------------------+---------------+---------------+
//!  Field:      | reserved (1) | timestamp (41) | datacenter ID (5)| machine ID (5)| sequence (12) |
//!              +--------------+----------------+------------------+---------------+---------------+
//! ```
//!
//! Layouts are declared at compile time with [`define_snowflake_id!`]; the
//! default is [`SnowflakeClassicId`]. Generators validate the node IDs once at
//! construction and then mint strictly increasing IDs, returning a
//! [`ClockError`] rather than an out-of-order ID when the wall clock moves
//! backward.
//!
//! ```
//! use snowmint::{LockSnowflakeGenerator, SnowflakeClassicId, SnowflakeId, SystemClock};
//!
//! let generator =
//!     LockSnowflakeGenerator::<SnowflakeClassicId, _>::new(1, 1, SystemClock::default())?;
//!
//! let a = generator.try_next_id()?;
//! let b = generator.try_next_id()?;
//! assert!(a < b);
//! assert_eq!(b.datacenter_id(), 1);
//! assert_eq!(b.machine_id(), 1);
//! # Ok::<(), snowmint::Error>(())
//! ```

#[cfg(feature = "base32")]
mod base32;
mod error;
#[cfg(feature = "futures")]
mod futures;
mod generator;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod time;

#[cfg_attr(docsrs, doc(cfg(feature = "base32")))]
#[cfg(feature = "base32")]
pub use crate::base32::*;
pub use crate::error::*;
#[cfg_attr(docsrs, doc(cfg(feature = "futures")))]
#[cfg(feature = "futures")]
pub use crate::futures::*;
pub use crate::generator::*;
pub use crate::id::*;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
