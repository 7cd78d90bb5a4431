//! Salesforce CLI (`sf`) integration.
//!
//! The explorer never stores credentials of its own. Tokens come from the
//! CLI's authenticated org store via `sf org display --json`, and a missing
//! or expired login is fixed by `sf org login web`.

use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info, instrument};

use crate::error::{Error, ErrorKind, Result};

/// Longest CLI error text carried into an error message.
const MAX_CLI_MESSAGE: usize = 300;

/// Settings for invoking the Salesforce CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Executable name or path.
    pub bin: String,
    /// Org alias or username passed as `--target-org`; the CLI default org
    /// is used when unset.
    pub target_org: Option<String>,
    /// Instance URL passed to `sf org login web` (sandbox or My Domain login).
    pub login_instance_url: Option<String>,
    /// Budget for `sf org display`.
    pub display_timeout: Duration,
    /// Budget for the interactive browser login.
    pub login_timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            bin: "sf".to_string(),
            target_org: None,
            login_instance_url: None,
            display_timeout: Duration::from_secs(60),
            login_timeout: Duration::from_secs(300),
        }
    }
}

impl CliConfig {
    /// Set the target org alias or username.
    pub fn with_target_org(mut self, alias: impl Into<String>) -> Self {
        self.target_org = Some(alias.into());
        self
    }

    /// Set the CLI executable.
    pub fn with_bin(mut self, bin: impl Into<String>) -> Self {
        self.bin = bin.into();
        self
    }

    /// Set the login instance URL.
    pub fn with_login_instance_url(mut self, url: impl Into<String>) -> Self {
        self.login_instance_url = Some(url.into());
        self
    }
}

/// The `result` object of `sf org display --json`.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgDisplay {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub instance_url: String,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl std::fmt::Debug for OrgDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrgDisplay")
            .field("access_token", &"[REDACTED]")
            .field("instance_url", &self.instance_url)
            .field("api_version", &self.api_version)
            .field("username", &self.username)
            .field("alias", &self.alias)
            .field("name", &self.name)
            .field("id", &self.id)
            .finish()
    }
}

impl OrgDisplay {
    /// Display name for the org: its name, else its alias.
    pub fn org_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.alias.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Deserialize)]
struct CliEnvelope {
    #[serde(default)]
    status: i32,
    result: Option<OrgDisplay>,
    #[serde(default)]
    message: Option<String>,
}

/// Parse the JSON printed by `sf org display --json`.
///
/// A non-zero `status`, a missing `result`, or a result without token or
/// instance URL all mean there is no usable org.
pub fn parse_org_display(stdout: &str) -> Result<OrgDisplay> {
    let envelope: CliEnvelope = serde_json::from_str(stdout.trim()).map_err(|e| {
        Error::with_source(
            ErrorKind::SfdxCli(format!("unparseable org display output: {e}")),
            e,
        )
    })?;

    if envelope.status != 0 {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("org display returned status {}", envelope.status));
        return Err(Error::new(ErrorKind::SfdxCli(clip(&message))));
    }

    let org = envelope.result.ok_or_else(|| {
        Error::new(ErrorKind::SfdxCli(
            "org display output has no result".to_string(),
        ))
    })?;

    if org.access_token.is_empty() || org.instance_url.is_empty() {
        return Err(Error::new(ErrorKind::SfdxCli(
            "no authenticated org: accessToken or instanceUrl missing".to_string(),
        )));
    }

    Ok(org)
}

/// Operations the session bootstrap needs from the Salesforce CLI.
#[async_trait]
pub trait OrgCli: Send + Sync {
    /// Credentials and details of the target org.
    async fn org_display(&self) -> Result<OrgDisplay>;

    /// Run the interactive browser login. Returns once the CLI exits
    /// successfully.
    async fn login_web(&self) -> Result<()>;
}

/// [`OrgCli`] backed by the real `sf` executable.
#[derive(Debug, Clone, Default)]
pub struct SfCli {
    config: CliConfig,
}

impl SfCli {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    async fn run(&self, args: &[&str], budget: Duration) -> Result<Output> {
        debug!(bin = %self.config.bin, ?args, "Running Salesforce CLI");

        let child = Command::new(&self.config.bin)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::with_source(
                        ErrorKind::ToolingAbsent(format!(
                            "'{}' was not found. Install the Salesforce CLI \
                             (https://developer.salesforce.com/tools/salesforcecli) \
                             and make sure it is on PATH",
                            self.config.bin
                        )),
                        e,
                    )
                } else {
                    Error::from(e)
                }
            })?;

        // Dropping the future on timeout drops the child, which kills it.
        match tokio::time::timeout(budget, child.wait_with_output()).await {
            Ok(output) => Ok(output?),
            Err(_) => Err(Error::new(ErrorKind::Timeout(format!(
                "{} {} did not finish within {}s",
                self.config.bin,
                args.first().copied().unwrap_or_default(),
                budget.as_secs()
            )))),
        }
    }
}

#[async_trait]
impl OrgCli for SfCli {
    #[instrument(skip(self), fields(target_org = ?self.config.target_org))]
    async fn org_display(&self) -> Result<OrgDisplay> {
        let mut args = vec!["org", "display", "--json"];
        if let Some(ref alias) = self.config.target_org {
            args.extend(["--target-org", alias.as_str()]);
        }

        let output = self.run(&args, self.config.display_timeout).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        // The CLI reports failures as JSON on stdout with a non-zero exit,
        // so parse first and only fall back to stderr when that fails.
        match parse_org_display(&stdout) {
            Ok(org) => Ok(org),
            Err(err) if output.status.success() => Err(err),
            Err(err) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                if stderr.trim().is_empty() {
                    Err(err)
                } else {
                    Err(Error::new(ErrorKind::SfdxCli(clip(stderr.trim()))))
                }
            }
        }
    }

    #[instrument(skip(self))]
    async fn login_web(&self) -> Result<()> {
        let mut args = vec!["org", "login", "web"];
        if let Some(ref alias) = self.config.target_org {
            args.extend(["--alias", alias.as_str()]);
        }
        if let Some(ref url) = self.config.login_instance_url {
            args.extend(["--instance-url", url.as_str()]);
        }

        info!("Starting browser login");
        let output = self.run(&args, self.config.login_timeout).await?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            format!("login exited with {}", output.status)
        } else {
            clip(stderr.trim())
        };
        Err(Error::new(ErrorKind::SfdxCli(detail)))
    }
}

fn clip(message: &str) -> String {
    if message.len() <= MAX_CLI_MESSAGE {
        return message.to_string();
    }
    let mut end = MAX_CLI_MESSAGE;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &message[..end])
}
