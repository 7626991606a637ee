//! Configuration for Mindspace.

use std::net::SocketAddr;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Main configuration for the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: ServerConfig::from_env()?,
            llm: LlmConfig::from_env()?,
            auth: AuthConfig::from_env()?,
        })
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address for the gateway.
    pub addr: SocketAddr,
    /// Maximum chat/story requests per user per window.
    pub rate_limit_requests: u64,
    /// Rate-limit window in seconds.
    pub rate_limit_window_secs: u64,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let addr = optional_env("MINDSPACE_ADDR")?
            .unwrap_or_else(|| "127.0.0.1:8760".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                key: "MINDSPACE_ADDR".to_string(),
                message: format!("must be host:port: {e}"),
            })?;

        Ok(Self {
            addr,
            rate_limit_requests: parse_optional_env("MINDSPACE_RATE_LIMIT", 20)?,
            rate_limit_window_secs: parse_optional_env("MINDSPACE_RATE_WINDOW_SECS", 60)?,
        })
    }
}

/// Hosted generative-text API configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
}

impl LlmConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = optional_env("GEMINI_API_KEY")?.ok_or_else(|| {
            ConfigError::MissingRequired {
                key: "GEMINI_API_KEY".to_string(),
                hint: "Set GEMINI_API_KEY in the environment or .env".to_string(),
            }
        })?;

        let model =
            optional_env("GEMINI_MODEL")?.unwrap_or_else(|| "gemini-1.5-flash-002".to_string());

        let base_url = optional_env("GEMINI_BASE_URL")?
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string());

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            base_url,
        })
    }
}

/// Bearer-token auth configuration.
///
/// Tokens are issued out of band (the identity provider is an external
/// collaborator). `MINDSPACE_TOKENS` holds comma-separated `token=user_id`
/// pairs; a bare token maps to the `default` user for single-user setups.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// `(token, user_id)` pairs.
    pub tokens: Vec<(SecretString, String)>,
}

impl AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = optional_env("MINDSPACE_TOKENS")?.ok_or_else(|| {
            ConfigError::MissingRequired {
                key: "MINDSPACE_TOKENS".to_string(),
                hint: "Set MINDSPACE_TOKENS to comma-separated token=user_id pairs".to_string(),
            }
        })?;

        let tokens = Self::parse_spec(&raw)?;
        if tokens.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "MINDSPACE_TOKENS".to_string(),
                message: "must contain at least one token".to_string(),
            });
        }
        Ok(Self { tokens })
    }

    fn parse_spec(raw: &str) -> Result<Vec<(SecretString, String)>, ConfigError> {
        let mut tokens = Vec::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let (token, user_id) = match entry.split_once('=') {
                Some((t, u)) if t.is_empty() || u.is_empty() => {
                    return Err(ConfigError::InvalidValue {
                        key: "MINDSPACE_TOKENS".to_string(),
                        message: format!("malformed entry {entry:?}"),
                    });
                }
                Some((t, u)) => (t.to_string(), u.to_string()),
                None => (entry.to_string(), "default".to_string()),
            };
            tokens.push((SecretString::from(token), user_id));
        }
        Ok(tokens)
    }
}

pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to read {key}: {e}"
        ))),
    }
}

pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|v| v.unwrap_or(default))
}
