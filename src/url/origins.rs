use crate::ConfigError;
use url::Url;

/// The validated `(source, target)` origin pair for one mirror run.
///
/// Both origins are absolute http(s) URLs with an enforced trailing slash.
/// The pair is immutable for the run: it defines the rewrite substitution and
/// the local/remote traversal boundary.
#[derive(Debug, Clone)]
pub struct Origins {
    source: Url,
    target: Url,
}

impl Origins {
    /// Builds the origin pair, enforcing the trailing slash on both URLs.
    ///
    /// Fails fast with a configuration error when either URL is not an
    /// absolute http(s) URL.
    pub fn new(source: &str, target: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            source: parse_origin("source", source)?,
            target: parse_origin("target", target)?,
        })
    }

    /// The origin being mirrored
    pub fn source(&self) -> &Url {
        &self.source
    }

    /// The origin the mirror will be served from
    pub fn target(&self) -> &Url {
        &self.target
    }
}

fn parse_origin(field: &str, value: &str) -> Result<Url, ConfigError> {
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{} URL must start with http:// or https://, got '{}'",
            field, value
        )));
    }

    let slashed = if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{}/", value)
    };

    Url::parse(&slashed).map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))
}
