//! Logger setup for binaries and tests.
//!
//! Library code only uses the `log` macros; `env_logger` is installed here.

mod init;

pub use init::{init_logging, LoggingConfig};
