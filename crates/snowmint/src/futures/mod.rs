#[cfg(feature = "async-tokio")]
mod runtime;
mod sleep_provider;
mod snowflake;

#[cfg_attr(docsrs, doc(cfg(feature = "async-tokio")))]
#[cfg(feature = "async-tokio")]
pub use runtime::*;
pub use sleep_provider::*;
pub use snowflake::*;
