//! Explorer configuration.

use std::time::Duration;

use sf_explorer_auth::{CliConfig, PRODUCTION_LOGIN_URL, SANDBOX_LOGIN_URL};
use sf_explorer_client::ClientConfig;
use sf_explorer_rest::DEFAULT_ROW_LIMIT;

use crate::error::{Error, ErrorKind, Result};

/// Everything needed to build an [`Explorer`](crate::Explorer).
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// HTTP settings.
    pub client: ClientConfig,
    /// Salesforce CLI settings.
    pub cli: CliConfig,
    /// Pinned API version. When unset the version reported by the CLI is
    /// used, falling back to the client default.
    pub api_version: Option<String>,
    /// Cap on rows collected by a user query.
    pub query_row_limit: usize,
    /// Answer to the login prompt for hosts that cannot ask the user.
    pub auto_login: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            cli: CliConfig::default(),
            api_version: None,
            query_row_limit: DEFAULT_ROW_LIMIT,
            auto_login: false,
        }
    }
}

impl ExplorerConfig {
    /// Read overrides from the environment:
    ///
    /// | Variable | Meaning |
    /// |---|---|
    /// | `SF_TARGET_ORG` | org alias or username |
    /// | `SF_CLI_BIN` | path to the `sf` executable |
    /// | `SF_API_VERSION` | pinned API version, e.g. `62.0` |
    /// | `SF_LOGIN_URL` | instance URL for browser login, or `production` / `sandbox` |
    /// | `SF_EXPLORER_AUTO_LOGIN` | `true` to start browser login without asking |
    /// | `SF_EXPLORER_QUERY_LIMIT` | row limit for queries |
    /// | `SF_EXPLORER_HTTP_TIMEOUT_SECS` | per-request timeout |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(alias) = var("SF_TARGET_ORG") {
            config.cli.target_org = Some(alias);
        }
        if let Some(bin) = var("SF_CLI_BIN") {
            config.cli.bin = bin;
        }
        if let Some(url) = var("SF_LOGIN_URL") {
            let url = match url.to_ascii_lowercase().as_str() {
                "production" => PRODUCTION_LOGIN_URL.to_string(),
                "sandbox" => SANDBOX_LOGIN_URL.to_string(),
                _ => url,
            };
            config.cli.login_instance_url = Some(url);
        }
        if let Some(version) = var("SF_API_VERSION") {
            if version.parse::<f32>().is_err() {
                return Err(invalid("SF_API_VERSION", &version));
            }
            config.api_version = Some(version);
        }
        if let Some(flag) = var("SF_EXPLORER_AUTO_LOGIN") {
            config.auto_login = parse_bool(&flag).ok_or_else(|| invalid("SF_EXPLORER_AUTO_LOGIN", &flag))?;
        }
        if let Some(limit) = var("SF_EXPLORER_QUERY_LIMIT") {
            config.query_row_limit = limit
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| invalid("SF_EXPLORER_QUERY_LIMIT", &limit))?;
        }
        if let Some(secs) = var("SF_EXPLORER_HTTP_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| invalid("SF_EXPLORER_HTTP_TIMEOUT_SECS", &secs))?;
            config.client.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> Error {
    Error::new(ErrorKind::Config(format!("invalid {key}: {value:?}")))
}
