/// Configuration for the Roster web interface
///
/// Values are fixed at build time. Every field can be overridden through an
/// environment variable read by `option_env!` when the bundle is compiled:
/// `ROSTER_API_URL`, `ROSTER_COMPANY_ID`, `ROSTER_COMPANY_NAME` and
/// `ROSTER_LOG_LEVEL`.

use leptos::use_context;
use log::{warn, LevelFilter};

use crate::error::ConfigError;
use crate::types::Company;

const DEFAULT_API_URL: &str = "https://localhost:5000";
// Stand-in for the company of the signed-in administrator until
// authentication exists.
const DEFAULT_COMPANY_ID: &str = "fbc000fb-300f-4471-bc31-dfb1f0c31a0e";
const DEFAULT_COMPANY_NAME: &str = "Check Point";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub company: Company,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            company: Company {
                id: DEFAULT_COMPANY_ID.to_string(),
                name: DEFAULT_COMPANY_NAME.to_string(),
            },
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the overrides captured at compile time.
    /// Callers fall back to `AppConfig::default()` on error.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_overrides(
            option_env!("ROSTER_API_URL"),
            option_env!("ROSTER_COMPANY_ID"),
            option_env!("ROSTER_COMPANY_NAME"),
            option_env!("ROSTER_LOG_LEVEL"),
        )
    }

    pub fn from_overrides(
        api_url: Option<&str>,
        company_id: Option<&str>,
        company_name: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = api_url {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(id) = company_id {
            config.company.id = id.trim().to_string();
        }
        if let Some(name) = company_name {
            config.company.name = name.trim().to_string();
        }
        if let Some(level) = log_level {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(self.api_base_url.clone()));
        }

        if self.company.id.is_empty() {
            return Err(ConfigError::MissingCompanyId);
        }

        Ok(())
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url.trim_end_matches('/'))
    }
}

/// Hook to access the configuration provided by the root component
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(|| {
        warn!("AppConfig was not provided, using defaults");
        AppConfig::default()
    })
}
