use serde::Deserialize;

/// Main configuration structure for Petrify
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub private: Option<PrivateConfig>,
    #[serde(rename = "basic-auth")]
    pub basic_auth: Option<BasicAuthConfig>,
}

/// Origin pair configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Absolute URL of the live site to mirror
    pub source: String,

    /// Absolute URL the mirror will be served from
    pub target: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the mirrored files are written under
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "./public".to_string(),
        }
    }
}

/// Private-mode configuration for password-walled sites
#[derive(Debug, Clone, Deserialize)]
pub struct PrivateConfig {
    /// Password for the site's private-mode login form
    pub password: String,

    /// The private RSS feed URL the site exposes while password-walled
    #[serde(rename = "rss-url")]
    pub rss_url: String,
}

/// Basic-auth credentials for sites behind a reverse proxy
#[derive(Debug, Clone, Deserialize)]
pub struct BasicAuthConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}
