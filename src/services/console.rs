use crate::error::AppResult;

/// Terminal boundary of the pipeline: showing output and asking yes/no.
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    fn display(&self, text: &str);
    fn confirm(&self, question: &str) -> AppResult<bool>;
}

/// Only `y` (any case, surrounding whitespace ignored) counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
