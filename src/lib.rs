pub mod config;
pub mod core;
pub mod domain;
pub mod dsa;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::DrillsConfig;
pub use crate::core::{server::ServerHandle, workers::WorkerPool};
pub use crate::utils::error::{DrillError, Result};
