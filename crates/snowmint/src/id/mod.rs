mod interface;
mod layout;

pub use interface::*;
pub use layout::*;
