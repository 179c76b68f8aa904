//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

/// Port used when the configuration leaves `port` unset or zero.
pub const DEFAULT_PORT: u16 = 6667;

/// Real name used when the configuration leaves `real` empty.
pub const DEFAULT_REAL_NAME: &str = "GoKyle IRC client";

/// Host field of the USER line when the configuration leaves `host` empty.
/// Not mandated by IRC; servers ignore the field for clients.
pub const DEFAULT_HOST: &str = "*";

pub fn default_port() -> u16 {
    DEFAULT_PORT
}

pub fn default_real_name() -> String {
    DEFAULT_REAL_NAME.to_string()
}

pub fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
