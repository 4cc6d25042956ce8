use std::io::{self, Write};

use crate::error::AppResult;
use crate::services::Console;
use crate::services::console::is_affirmative;

/// Console on stdout/stdin.
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn display(&self, text: &str) {
        println!("{text}");
    }

    fn confirm(&self, question: &str) -> AppResult<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{question} (y/n): ")?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(is_affirmative(&input))
    }
}
