//! Logging is bootstrapped at `info` and reloaded with the filter from settings.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
