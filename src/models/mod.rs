mod intent;
mod order;

pub use intent::*;
pub use order::*;
