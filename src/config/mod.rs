//! Configuration loading for the Earnings Estimator.
//!
//! Configuration is a single YAML file; every section is optional and falls
//! back to built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use earnings_estimator::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/estimator.yaml").unwrap();
//! println!("Serving on {}", loader.config().server.bind);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DisplayConfig, EstimatorConfig, LoggingConfig, NotificationConfig, ScheduleDefaults,
    ServerConfig, StorageConfig,
};
