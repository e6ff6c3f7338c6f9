mod log_utils;

pub use log_utils::log_init;
// Re-export the tracing macros so that users of this crate
// do not need to depend on tracing directly
pub use tracing::{self, debug, error, info, trace, warn};
