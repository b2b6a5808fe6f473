//! Logging initialization for the `cube-tiler` binary.

mod init;
mod structs;

pub use init::init_cli;
pub use structs::LogConfig;
