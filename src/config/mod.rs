//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: the session configuration record and its loaders
//! - [`defaults`]: serde default functions and fallback constants
//! - [`validation`]: required-field checks run after parsing

mod defaults;
mod types;
mod validation;

pub use defaults::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REAL_NAME};
pub use types::{ConfigError, SessionConfig};
pub use validation::{ValidationError, validate};
