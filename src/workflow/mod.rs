pub mod commit;
pub mod pull_request;
pub mod release;

use tracing::info;

use crate::context::AppContext;
use crate::domain::artifact::ArtifactRequest;
use crate::domain::prompt::build_prompt;
use crate::error::AppResult;

/// BuildPrompt and CallCompletion, shared by every artifact kind.
async fn generate(ctx: &AppContext, request: &ArtifactRequest) -> AppResult<String> {
    let prompt = build_prompt(request);
    info!(kind = request.kind.as_str(), "generating artifact");
    ctx.language_model.complete(&prompt).await
}
