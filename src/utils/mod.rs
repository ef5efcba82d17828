//! Utilities for altergen

pub mod logging;

pub use logging::init_logging;
