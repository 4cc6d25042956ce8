pub mod commit;
pub mod config;
pub mod pr;
pub mod release;

use std::sync::Arc;

use tracing::debug;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::git::GitCli;
use crate::infra::openai::OpenAiClient;
use crate::infra::terminal::TerminalConsole;

fn build_context() -> AppResult<AppContext> {
    let cwd = std::env::current_dir()?;
    build_context_from(AppConfig::load(&cwd)?)
}

/// Wires the real services. Fails before any git or network client exists
/// when no API key is configured.
fn build_context_from(config: AppConfig) -> AppResult<AppContext> {
    let credential = config.credential()?;

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let language_model = Arc::new(OpenAiClient::new(credential));
    let console = Arc::new(TerminalConsole);

    Ok(AppContext::new(config, git, language_model, console))
}

/// Command boundary: failures become one message on stderr, never a
/// non-zero exit.
pub fn report(command: &str, err: AppError) {
    debug!(command, error = %err, "command failed");
    eprintln!("{}", failure_message(&err));
}

const STAGED_HINT: &str = "The changes remain staged; commit or unstage them manually.";

fn failure_message(err: &AppError) -> String {
    match err {
        AppError::PartiallyApplied { .. } => format!("Error: {err}\n{STAGED_HINT}"),
        _ => format!("Error: {err}"),
    }
}
