//! Configuration validation.
//!
//! Validates configuration after parsing so a session is never built from
//! an incomplete record.

use super::SessionConfig;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server is required")]
    MissingServer,
    #[error("nick is required")]
    MissingNick,
    #[error("sys is required")]
    MissingSystemName,
    #[error("user is required")]
    MissingUserName,
    #[error("at least one channel is required")]
    NoChannels,
    #[error("channel names must not be empty")]
    EmptyChannel,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &SessionConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Required fields
    if config.server.is_empty() {
        errors.push(ValidationError::MissingServer);
    }
    if config.nick.is_empty() {
        errors.push(ValidationError::MissingNick);
    }
    if config.system_name.is_empty() {
        errors.push(ValidationError::MissingSystemName);
    }
    if config.user_name.is_empty() {
        errors.push(ValidationError::MissingUserName);
    }

    if config.channels.is_empty() {
        errors.push(ValidationError::NoChannels);
    } else if config.channels.iter().any(|c| c.trim().is_empty()) {
        errors.push(ValidationError::EmptyChannel);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_valid_config() -> String {
        r##"
server = "irc.example.org"
nick = "kyle"
sys = "unix"
user = "kyle"
channels = ["#a", "#b"]
"##
        .to_string()
    }

    #[test]
    fn test_valid_config_passes() {
        let config: SessionConfig = toml::from_str(&minimal_valid_config()).unwrap();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_server_fails() {
        let toml = minimal_valid_config().replace("irc.example.org", "");
        let config: SessionConfig = toml::from_str(&toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingServer]);
    }

    #[test]
    fn test_no_channels_fails() {
        let toml = minimal_valid_config().replace(r##"["#a", "#b"]"##, "[]");
        let config: SessionConfig = toml::from_str(&toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::NoChannels)));
    }

    #[test]
    fn test_blank_channel_fails() {
        let toml = minimal_valid_config().replace(r##"["#a", "#b"]"##, r##"["#a", " "]"##);
        let config: SessionConfig = toml::from_str(&toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyChannel]);
    }

    #[test]
    fn test_all_missing_reported() {
        let config: SessionConfig = toml::from_str("").unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingServer,
                ValidationError::MissingNick,
                ValidationError::MissingSystemName,
                ValidationError::MissingUserName,
                ValidationError::NoChannels,
            ]
        );
    }
}
