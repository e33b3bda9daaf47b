use crate::error::ConfigError;

pub const API_URL_VAR: &str = "HOTELFIX_API_URL";
pub const POLL_INTERVAL_VAR: &str = "HOTELFIX_POLL_INTERVAL_SECS";
pub const PAGE_SIZE_VAR: &str = "HOTELFIX_PAGE_SIZE";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub notification_poll_interval_secs: u64,
    pub default_page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            notification_poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Load configuration for the current target.
    ///
    /// Native builds read a `.env` file and the process environment at startup. WASM builds
    /// have no environment, so the same variables are baked in at compile time.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            Self::from_lookup(|var| std::env::var(var).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|var| match var {
                API_URL_VAR => option_env!("HOTELFIX_API_URL").map(str::to_string),
                POLL_INTERVAL_VAR => option_env!("HOTELFIX_POLL_INTERVAL_SECS").map(str::to_string),
                PAGE_SIZE_VAR => option_env!("HOTELFIX_PAGE_SIZE").map(str::to_string),
                _ => None,
            })
        }
    }

    /// Build a config from any variable source, falling back to defaults for unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let notification_poll_interval_secs =
            parse_positive(POLL_INTERVAL_VAR, lookup(POLL_INTERVAL_VAR))?
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        let default_page_size = parse_positive(PAGE_SIZE_VAR, lookup(PAGE_SIZE_VAR))?
            .map(|size| size as usize)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Ok(Self {
            api_base_url,
            notification_poll_interval_secs,
            default_page_size,
        })
    }
}

fn parse_positive(var: &str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let parsed = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })?;

    if parsed == 0 {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Some(parsed))
}
