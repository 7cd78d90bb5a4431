//! Stdio host for the object explorer panel.
//!
//! Reads newline-delimited JSON from stdin: view commands
//! (`{"command":"selectObject","objectName":"Account"}`) and lifecycle
//! events (`{"event":"hidden"}`). Writes view notifications to stdout, one
//! JSON object per line. Logs go to stderr.
//!
//! ```sh
//! export SF_TARGET_ORG=my-org
//! echo '{"command":"runQuery","query":"SELECT Id FROM Account LIMIT 5"}' \
//!     | RUST_LOG=sf_explorer=debug cargo run --bin sf-object-explorer
//! ```
//!
//! At end of input the commands already read are answered, then the host
//! exits. `{"event":"dispose"}` exits at once.

use std::process::ExitCode;
use std::sync::Arc;

use sf_object_explorer::auth::StaticPrompt;
use sf_object_explorer::panel::{Explorer, ExplorerConfig};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sf_explorer=info,sf_object_explorer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Explorer host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ExplorerConfig::from_env()?;
    // A stdio host cannot show a dialog; the login answer comes from config.
    let prompt = Arc::new(StaticPrompt(config.auto_login));
    let explorer = Explorer::from_config(&config, prompt)?;

    sf_object_explorer::stdio::serve(
        explorer,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    info!("Explorer host stopped");
    Ok(())
}
