use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key not found, run 'project-commit config' to set it up")]
    MissingCredential,
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("`git {command}` failed ({}): {stderr}", describe_exit(.code))]
    VersionControl {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("failed to reach the completion service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service responded with {status}: {body}")]
    RemoteRejected {
        status: u16,
        body: String,
    },
    #[error("unexpected response shape from completion service: {0}")]
    MalformedResponse(String),
    #[error("changes were staged but the commit failed: {source}")]
    PartiallyApplied {
        source: Box<AppError>,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or("did not run".to_string(), |c| format!("exit code {c}"))
}

pub type AppResult<T> = Result<T, AppError>;
