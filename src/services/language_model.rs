use async_trait::async_trait;

use crate::domain::prompt::CompletionPrompt;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModelService: Send + Sync {
    async fn complete(&self, prompt: &CompletionPrompt) -> AppResult<String>;
}
