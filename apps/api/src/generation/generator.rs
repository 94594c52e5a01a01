//! Content generation — validates a request, resolves category policy,
//! composes the instruction, and makes exactly one completion call.
//!
//! Flow: trim input → resolve policy → resolve length descriptor →
//!       compose prompt → complete → word count → attach sources.
//!
//! The handler is stateless per call. Any apparent staging lives in prompt
//! text only; one completion call is issued per request, always.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::composer::compose_prompt;
use crate::generation::registry::CategoryRegistry;
use crate::llm_client::CompletionBackend;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for content generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub category: String,
    /// The subject to write about — or, for the summary category, the text
    /// to be condensed.
    pub topic_or_text: String,
    pub length_key: String,
    /// Free-text style qualifier, passed through into the instruction.
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_tone() -> String {
    "academic".to_string()
}

/// Result of one generation call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Generated text, verbatim from the completion backend except trimming.
    pub content: String,
    /// Recomputed server-side from `content`; upstream counts are not trusted.
    pub word_count: usize,
    /// Echoed back for client confirmation.
    pub category: String,
    /// Fixed placeholder citations for the essay family, empty otherwise.
    pub sources: Vec<String>,
}

/// Whitespace-delimited token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Runs one generation request end to end.
///
/// Validation happens before the completion call: a blank input or an
/// unresolvable category/length key never reaches the backend.
pub async fn generate_content(
    registry: &CategoryRegistry,
    backend: &dyn CompletionBackend,
    request: &GenerateRequest,
) -> Result<GenerationResult, AppError> {
    let topic_or_text = request.topic_or_text.trim();
    if topic_or_text.is_empty() {
        return Err(AppError::Validation(
            "topic_or_text cannot be empty".to_string(),
        ));
    }

    let policy = registry.resolve(&request.category)?;
    let length_descriptor = policy.resolve_length(&request.length_key)?;

    let prompt = compose_prompt(policy, topic_or_text, &request.tone, length_descriptor);

    let content = backend
        .complete(policy.system_instruction, &prompt)
        .await?;

    let word_count = word_count(&content);
    info!(
        "Generated {} words for category '{}' ({})",
        word_count, policy.id, length_descriptor
    );

    Ok(GenerationResult {
        content,
        word_count,
        category: policy.id.to_string(),
        sources: policy
            .placeholder_sources
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}

/// Runs N independent requests concurrently and returns N outcomes in input
/// order. One request's failure never disturbs its siblings; each slot
/// carries its own result or error.
pub async fn generate_batch(
    registry: &CategoryRegistry,
    backend: &dyn CompletionBackend,
    requests: &[GenerateRequest],
) -> Vec<Result<GenerationResult, AppError>> {
    join_all(
        requests
            .iter()
            .map(|request| generate_content(registry, backend, request)),
    )
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
