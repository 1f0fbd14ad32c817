//! Panel configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

use agribase_agents::CountingSequence;
use agribase_auth::Router;
use agribase_products::{ViewMode, ViewModeParseError};

pub const ENV_LOGIN_PAGE: &str = "AGRIBASE_LOGIN_PAGE";
pub const ENV_AGENT_CODE_PREFIX: &str = "AGRIBASE_AGENT_CODE_PREFIX";
pub const ENV_AGENT_CODE_WIDTH: &str = "AGRIBASE_AGENT_CODE_WIDTH";
pub const ENV_DEFAULT_VIEW_MODE: &str = "AGRIBASE_DEFAULT_VIEW_MODE";
pub const ENV_FIXTURES: &str = "AGRIBASE_FIXTURES";

const MAX_CODE_WIDTH: usize = 12;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),

    #[error("agent code width '{0}' must be a number between 1 and 12")]
    InvalidCodeWidth(String),

    #[error(transparent)]
    InvalidViewMode(#[from] ViewModeParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub login_page: String,
    pub agent_code_prefix: String,
    pub agent_code_width: usize,
    pub default_view_mode: ViewMode,
    pub fixtures: Option<PathBuf>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            login_page: "index.html".to_string(),
            agent_code_prefix: "AG".to_string(),
            agent_code_width: 3,
            default_view_mode: ViewMode::Table,
            fixtures: None,
        }
    }
}

impl PanelConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    ///
    /// Invalid values are logged and replaced by their defaults; configuration
    /// never stops the panel from starting.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOGIN_PAGE) {
            match non_empty(ENV_LOGIN_PAGE, raw) {
                Ok(page) => config.login_page = page,
                Err(err) => tracing::warn!(%err, "using default login page"),
            }
        }

        if let Some(raw) = lookup(ENV_AGENT_CODE_PREFIX) {
            match non_empty(ENV_AGENT_CODE_PREFIX, raw) {
                Ok(prefix) => config.agent_code_prefix = prefix,
                Err(err) => tracing::warn!(%err, "using default agent code prefix"),
            }
        }

        if let Some(raw) = lookup(ENV_AGENT_CODE_WIDTH) {
            match parse_code_width(&raw) {
                Ok(width) => config.agent_code_width = width,
                Err(err) => tracing::warn!(%err, "using default agent code width"),
            }
        }

        if let Some(raw) = lookup(ENV_DEFAULT_VIEW_MODE) {
            match raw.trim().parse::<ViewMode>() {
                Ok(mode) => config.default_view_mode = mode,
                Err(err) => {
                    let err = ConfigError::from(err);
                    tracing::warn!(%err, "using default product view mode");
                }
            }
        }

        config.fixtures = lookup(ENV_FIXTURES)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    pub fn router(&self) -> Router {
        Router::new(self.login_page.clone())
    }

    pub fn code_sequence(&self) -> CountingSequence {
        CountingSequence::new(self.agent_code_prefix.clone(), self.agent_code_width)
    }
}

fn non_empty(key: &'static str, raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ConfigError::Empty(key))
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_code_width(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(width) if (1..=MAX_CODE_WIDTH).contains(&width) => Ok(width),
        _ => Err(ConfigError::InvalidCodeWidth(raw.to_string())),
    }
}
