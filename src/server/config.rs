//! Environment configuration.
//!
//! Values are read from the process environment after `dotenvy` has loaded an optional `.env`
//! file. Credentials are mandatory and must not keep the placeholder values shipped in the
//! `.env.example`; everything else falls back to a default.

use std::{
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
    time::Duration,
};

use url::Url;

use crate::server::error::config::ConfigError;

/// Placeholder application id which must be replaced before the server may start.
pub const PLACEHOLDER_APP_ID: &str = "YOUR_APP_ID";
/// Placeholder application secret which must be replaced before the server may start.
pub const PLACEHOLDER_APP_SECRET: &str = "YOUR_APP_SECRET";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_AUTH_URL: &str = "https://api.nylas.com/oauth/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://api.nylas.com/oauth/token";
pub const DEFAULT_API_URL: &str = "https://api.nylas.com";
pub const DEFAULT_SCOPES: &str = "email";
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_POLL_INITIAL_BACKOFF_MS: u64 = 2000;
pub const DEFAULT_POLL_MAX_BACKOFF_MS: u64 = 30_000;
pub const DEFAULT_VIEW_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug)]
pub struct Config {
    pub app_id: String,
    pub app_secret: String,
    pub host: IpAddr,
    pub port: u16,
    /// Externally reachable base URL, used instead of the `Host` header for the callback.
    pub public_url: Option<Url>,
    pub provider: ProviderConfig,
    pub poll: PollConfig,
}

/// Endpoints of the email provider.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub auth_url: Url,
    pub token_url: Url,
    pub api_url: Url,
    pub scopes: Vec<String>,
}

/// Retry policy used while waiting for a new mailbox to sync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    /// Upper bound for rendering the message view, including every retry.
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_POLL_MAX_ATTEMPTS,
            initial_backoff: Duration::from_millis(DEFAULT_POLL_INITIAL_BACKOFF_MS),
            max_backoff: Duration::from_millis(DEFAULT_POLL_MAX_BACKOFF_MS),
            timeout: Duration::from_secs(DEFAULT_VIEW_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = required_credential(&lookup, "APP_ID", PLACEHOLDER_APP_ID)?;
        let app_secret = required_credential(&lookup, "APP_SECRET", PLACEHOLDER_APP_SECRET)?;

        let host = parse_or(&lookup, "HOST", || DEFAULT_HOST)?;
        let port = parse_or(&lookup, "PORT", || DEFAULT_PORT)?;

        let public_url = match lookup("PUBLIC_URL").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(base_url(parse_url("PUBLIC_URL", &raw)?)),
            None => None,
        };

        let provider = ProviderConfig {
            auth_url: url_or(&lookup, "PROVIDER_AUTH_URL", DEFAULT_AUTH_URL)?,
            token_url: url_or(&lookup, "PROVIDER_TOKEN_URL", DEFAULT_TOKEN_URL)?,
            api_url: base_url(url_or(&lookup, "PROVIDER_API_URL", DEFAULT_API_URL)?),
            scopes: lookup("PROVIDER_SCOPES")
                .unwrap_or_else(|| DEFAULT_SCOPES.to_string())
                .split(',')
                .map(str::trim)
                .filter(|scope| !scope.is_empty())
                .map(str::to_string)
                .collect(),
        };

        let max_attempts = parse_or(&lookup, "POLL_MAX_ATTEMPTS", || DEFAULT_POLL_MAX_ATTEMPTS)?;
        if max_attempts == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "POLL_MAX_ATTEMPTS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let timeout_secs = parse_or(&lookup, "VIEW_TIMEOUT_SECS", || DEFAULT_VIEW_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "VIEW_TIMEOUT_SECS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let poll = PollConfig {
            max_attempts,
            initial_backoff: Duration::from_millis(parse_or(
                &lookup,
                "POLL_INITIAL_BACKOFF_MS",
                || DEFAULT_POLL_INITIAL_BACKOFF_MS,
            )?),
            max_backoff: Duration::from_millis(parse_or(&lookup, "POLL_MAX_BACKOFF_MS", || {
                DEFAULT_POLL_MAX_BACKOFF_MS
            })?),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            app_id,
            app_secret,
            host,
            port,
            public_url,
            provider,
            poll,
        })
    }
}

fn required_credential<F>(lookup: &F, var: &str, placeholder: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))?;

    if value == placeholder {
        return Err(ConfigError::PlaceholderCredential(var.to_string()));
    }

    Ok(value)
}

fn parse_or<F, T, D>(lookup: &F, var: &str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> T,
{
    match lookup(var).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default()),
    }
}

fn url_or<F>(lookup: &F, var: &str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());

    parse_url(var, &raw)
}

/// Ensure the path ends with `/` so `Url::join` appends below it instead of replacing the last
/// segment.
fn base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url
}

fn parse_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })
}
