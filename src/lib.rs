//! Readings mock - stand-in ingestion server for local energy-monitor development

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
