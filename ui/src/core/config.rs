//! Site configuration.
//!
//! The defaults live in `ui/site.toml`, embedded at compile time. The contact
//! endpoint can be overridden at build time through `LDC_CONTACT_ENDPOINT`
//! (handy for CI deploys that should not commit the Formspree id).

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

/// Marker left in `site.toml` until a real Formspree form exists.
const ENDPOINT_PLACEHOLDER: &str = "YOUR_FORMSPREE_ENDPOINT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    pub language: LanguageConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    /// Raw endpoint as written in the config; see [`ContactConfig::endpoint`].
    #[serde(rename = "endpoint")]
    pub raw_endpoint: Option<String>,
    pub fallback_address: String,
    pub default_subject: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanguageConfig {
    pub storage_key: String,
    pub flags: FlagConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlagConfig {
    pub pt: String,
    pub en: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            raw_endpoint: None,
            fallback_address: "comercial@ldcbusiness.co.mz".into(),
            default_subject: "Contacto LDC".into(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            storage_key: "preferredLanguage".into(),
            flags: FlagConfig::default(),
        }
    }
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            pt: "https://flagcdn.com/w20/pt.png".into(),
            en: "https://flagcdn.com/w20/gb.png".into(),
        }
    }
}

impl ContactConfig {
    /// The endpoint to POST to, or `None` when submissions should fall back
    /// to `mailto:`. Blank values and the placeholder count as unconfigured.
    pub fn endpoint(&self) -> Option<&str> {
        self.raw_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty() && !e.contains(ENDPOINT_PLACEHOLDER))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.raw_endpoint = Some(endpoint.into());
        self
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Embedded config plus build-time overrides. Never fails: a broken
    /// `site.toml` is logged and replaced by the defaults.
    pub fn load() -> Self {
        let mut config = match Self::parse(SITE_TOML) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using built-in defaults");
                Self::default()
            }
        };
        if let Some(endpoint) = option_env!("LDC_CONTACT_ENDPOINT") {
            config.contact.raw_endpoint = Some(endpoint.to_string());
        }
        config
    }
}

static CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::load);

/// Process-wide config, loaded on first use.
pub fn site() -> &'static SiteConfig {
    &CONFIG
}
