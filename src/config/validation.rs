use crate::config::types::{BasicAuthConfig, Config, OutputConfig, PrivateConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_output_config(&config.output)?;
    if let Some(private) = &config.private {
        validate_private_config(private)?;
    }
    if let Some(auth) = &config.basic_auth {
        validate_basic_auth_config(auth)?;
    }
    Ok(())
}

/// Validates the origin pair
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_origin("site.source", &config.source)?;
    validate_origin("site.target", &config.target)?;
    Ok(())
}

/// Validates a single origin URL: absolute, http(s), with a host
fn validate_origin(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} must start with http:// or https://, got '{}'",
            field, value
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "{} must have a host, got '{}'",
            field, value
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output.directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates private-mode configuration
fn validate_private_config(config: &PrivateConfig) -> Result<(), ConfigError> {
    if config.password.is_empty() {
        return Err(ConfigError::Validation(
            "private.password cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.rss_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid private.rss-url: {}", e)))?;

    Ok(())
}

/// Validates basic-auth configuration
fn validate_basic_auth_config(config: &BasicAuthConfig) -> Result<(), ConfigError> {
    if config.username.is_empty() && config.password.is_empty() {
        return Err(ConfigError::Validation(
            "basic-auth requires a username or a password".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config {
            site: SiteConfig {
                source: "http://internal.example/".to_string(),
                target: "https://public.example/".to_string(),
            },
            output: OutputConfig::default(),
            private: None,
            basic_auth: None,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_test_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_relative_source_rejected() {
        let mut config = create_test_config();
        config.site.source = "/just/a/path".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = create_test_config();
        config.site.target = "ftp://public.example/".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_empty_output_directory_rejected() {
        let mut config = create_test_config();
        config.output.directory = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_private_mode_requires_password() {
        let mut config = create_test_config();
        config.private = Some(PrivateConfig {
            password: String::new(),
            rss_url: "http://internal.example/secret/rss".to_string(),
        });
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_private_mode_requires_parsable_rss_url() {
        let mut config = create_test_config();
        config.private = Some(PrivateConfig {
            password: "abcd1234".to_string(),
            rss_url: "not a url".to_string(),
        });
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_basic_auth_accepts_username_only() {
        let mut config = create_test_config();
        config.basic_auth = Some(BasicAuthConfig {
            username: "user".to_string(),
            password: String::new(),
        });
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_basic_auth_rejects_both_empty() {
        let mut config = create_test_config();
        config.basic_auth = Some(BasicAuthConfig {
            username: String::new(),
            password: String::new(),
        });
        assert!(validate(&config).is_err());
    }
}
