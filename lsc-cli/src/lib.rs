//! Command-line drivers for the LSC keyboard engine.

pub mod driver;
pub mod logging;
pub mod script;
