mod crockford;
mod error;
mod snowflake;

pub use crockford::BASE32_LEN;
use crockford::{decode_u64, encode_u64};
pub use error::*;
pub use snowflake::*;
