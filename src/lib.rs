//! Starter kit - two small HTTP services
//!
//! - A basic backend exposing a welcome message and a health check
//! - An inference backend serving a fixed linear model (10 features -> 1 output)
//!
//! Both services share configuration, logging and error handling.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod telemetry;
pub mod types;

pub use error::{Error, InferenceError, Result};
