use std::io::{self, Write};

use clap::{Args, Subcommand};

use crate::config::{StoredConfig, config_file_path};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the stored configuration (secrets masked).
    Show,
}

pub fn run(args: ConfigArgs) -> AppResult<()> {
    match args.command {
        None => run_init(),
        Some(ConfigCommand::Show) => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;

    apply_prompt("Enter your OpenAI API key", &mut cfg.openai_api_key)?;
    cfg.save()?;

    let path = config_file_path()?;
    println!("Configuration saved successfully to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("OpenAI API key: {}", mask_secret(&cfg.openai_api_key));
    Ok(())
}

fn apply_prompt(field: &str, target: &mut Option<String>) -> AppResult<()> {
    let mut stdout = io::stdout();
    match target {
        Some(_) => write!(stdout, "{field} [****] (Enter to keep, '-' to clear): ")?,
        None => write!(stdout, "{field}: ")?,
    }
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    match interpret_input(&input) {
        PromptAction::Keep => {}
        PromptAction::Clear => *target = None,
        PromptAction::Set(value) => *target = Some(value),
    }
    Ok(())
}

fn interpret_input(input: &str) -> PromptAction {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        PromptAction::Keep
    } else if trimmed == "-" {
        PromptAction::Clear
    } else {
        PromptAction::Set(trimmed.to_string())
    }
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.len() > 6 && token.is_ascii() => {
            let prefix = &token[..3];
            let suffix = &token[token.len() - 3..];
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum PromptAction {
    Keep,
    Clear,
    Set(String),
}
