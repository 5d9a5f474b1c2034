//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Minimum length for a plausible browser user agent.
const MIN_USER_AGENT_LENGTH: usize = 40;

/// Maximum username length.
const MAX_USERNAME_LENGTH: usize = 30;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_usernames(&config.targeted_profile.usernames)?;
    validate_user_agent(&config.client.user_agent)?;
    validate_app_id(&config.client.app_id)?;

    Ok(())
}

/// Validate the list of usernames to scrape.
pub fn validate_usernames<S: AsRef<str>>(usernames: &[S]) -> Result<()> {
    if usernames.is_empty() {
        return Err(Error::MissingConfig(
            "usernames (pass one with -u or list them under [targeted_profile])".to_string(),
        ));
    }

    // Letters, digits, dots and underscores, up to 30 characters.
    let pattern = Regex::new(r"^[A-Za-z0-9._]+$").unwrap();

    for username in usernames {
        let username = username.as_ref();

        if username.is_empty() || username.len() > MAX_USERNAME_LENGTH {
            return Err(Error::ConfigValidation {
                field: "usernames".to_string(),
                message: format!(
                    "'{}' must be between 1 and {} characters",
                    username, MAX_USERNAME_LENGTH
                ),
            });
        }

        if !pattern.is_match(username) {
            return Err(Error::ConfigValidation {
                field: "usernames".to_string(),
                message: format!(
                    "'{}' may only contain letters, digits, dots and underscores",
                    username
                ),
            });
        }
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    if user_agent.len() < MIN_USER_AGENT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: format!(
                "User agent must be at least {} characters to pass for a browser (got {})",
                MIN_USER_AGENT_LENGTH,
                user_agent.len()
            ),
        });
    }

    Ok(())
}

/// Validate the application id header value.
pub fn validate_app_id(app_id: &str) -> Result<()> {
    if app_id.is_empty() {
        return Err(Error::MissingConfig("app_id".to_string()));
    }

    if !app_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::ConfigValidation {
            field: "app_id".to_string(),
            message: format!("'{}' must be all digits", app_id),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_usernames(&["natgeo"]).is_ok());
        assert!(validate_usernames(&["some.user_123"]).is_ok());
        assert!(validate_usernames(&["a"]).is_ok());
    }

    #[test]
    fn test_empty_username_list() {
        assert!(validate_usernames::<&str>(&[]).is_err());
    }

    #[test]
    fn test_invalid_username_characters() {
        assert!(validate_usernames(&["user name"]).is_err());
        assert!(validate_usernames(&["user-name"]).is_err());
        assert!(validate_usernames(&["user!"]).is_err());
    }

    #[test]
    fn test_username_too_long() {
        let long = "a".repeat(31);
        assert!(validate_usernames(&[long.as_str()]).is_err());
    }

    #[test]
    fn test_user_agent_too_short() {
        assert!(validate_user_agent("curl/8.0").is_err());
        assert!(validate_user_agent("").is_err());
    }

    #[test]
    fn test_app_id_must_be_digits() {
        assert!(validate_app_id("936619743392459").is_ok());
        assert!(validate_app_id("abc123").is_err());
        assert!(validate_app_id("").is_err());
    }

    #[test]
    fn test_default_config_validates_with_username() {
        let mut config = Config::default();
        config.targeted_profile.usernames = vec!["natgeo".to_string()];
        assert!(validate_config(&config).is_ok());
    }
}
