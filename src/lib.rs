//! Landscaping job price estimator with a desktop form and a command-line front end.

pub mod app;
pub mod config;
pub mod domain;
pub mod ui;
pub mod util;

pub use config::{AppConfig, ConfigError, OutputFormat};
pub use domain::{estimate, estimate_breakdown, Estimate, FormSnapshot, Price, Selections};
