//! Logger bootstrap for binaries and tests.
//!
//! Library code only talks to the `log` facade; hosts that bring their own
//! logger never need to call into this module.

mod init;

pub use init::{init_logging, LoggingConfig};
