use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_GATEWAY_BASE_URL: &str = "http://pgsi.in/";
pub const GATEWAY_BASE_URL_ENV: &str = "GATEWAY_BASE_URL";

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub gateway: GatewaySection,
    #[serde(default)]
    pub forms: FormsSection,
    #[serde(default)]
    pub navigation: NavigationSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsSection {
    #[serde(default = "default_auto_dismiss_seconds")]
    pub auto_dismiss_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationSection {
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub verbose: bool,
}

fn default_auto_dismiss_seconds() -> u64 {
    3
}

fn default_settle_delay_ms() -> u64 {
    300
}

impl Default for FormsSection {
    fn default() -> Self {
        Self {
            auto_dismiss_seconds: default_auto_dismiss_seconds(),
        }
    }
}

impl Default for NavigationSection {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            gateway: GatewaySection {
                base_url: base_url.into(),
            },
            forms: FormsSection::default(),
            navigation: NavigationSection::default(),
            logging: LoggingSection::default(),
        }
    }

    /// Base URL from `GATEWAY_BASE_URL`, everything else at defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var(GATEWAY_BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_GATEWAY_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("gateway.base_url", &self.gateway.base_url)?;
        crate::utils::validation::validate_range(
            "forms.auto_dismiss_seconds",
            self.forms.auto_dismiss_seconds,
            0,
            60,
        )?;
        crate::utils::validation::validate_range(
            "navigation.settle_delay_ms",
            self.navigation.settle_delay_ms,
            0,
            5_000,
        )?;
        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn gateway_base_url(&self) -> &str {
        &self.gateway.base_url
    }

    fn auto_dismiss_delay(&self) -> Duration {
        Duration::from_secs(self.forms.auto_dismiss_seconds)
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.navigation.settle_delay_ms)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
