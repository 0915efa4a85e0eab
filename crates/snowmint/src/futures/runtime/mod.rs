mod tokio;
mod tokio_snowflake;

pub use tokio::*;
pub use tokio_snowflake::*;
