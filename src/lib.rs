pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::storage::LocalStorage;

pub use core::{engine::DashboardEngine, pipeline::DashboardPipeline};
pub use utils::error::{DashboardError, Result};
