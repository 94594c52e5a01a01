//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::{generate_batch, generate_content, GenerateRequest, GenerationResult};
use crate::generation::registry::{CategoryPolicy, LengthFallback, PromptStrategy};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BatchGenerateRequest {
    pub requests: Vec<GenerateRequest>,
}

/// One slot of a batch response, tagged with its originating request index.
/// A failed slot never disturbs its siblings.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchSlot {
    Success {
        index: usize,
        #[serde(flatten)]
        result: GenerationResult,
    },
    Error {
        index: usize,
        kind: &'static str,
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct BatchGenerateResponse {
    pub results: Vec<BatchSlot>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct LengthFormatEntry {
    pub key: &'static str,
    pub descriptor: &'static str,
}

/// Introspection view of a resolved category policy.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: &'static str,
    pub system_instruction: &'static str,
    pub strategy: PromptStrategy,
    pub length_formats: Vec<LengthFormatEntry>,
    /// Descriptor substituted for unknown length keys, if the category
    /// permits one.
    pub length_fallback: Option<&'static str>,
    pub sources_attached: bool,
}

impl From<&CategoryPolicy> for CategoryResponse {
    fn from(policy: &CategoryPolicy) -> Self {
        CategoryResponse {
            id: policy.id,
            system_instruction: policy.system_instruction,
            strategy: policy.strategy,
            length_formats: policy
                .length_formats
                .iter()
                .map(|&(key, descriptor)| LengthFormatEntry { key, descriptor })
                .collect(),
            length_fallback: match policy.length_fallback {
                LengthFallback::Relaxed(descriptor) => Some(descriptor),
                LengthFallback::Strict => None,
            },
            sources_attached: !policy.placeholder_sources.is_empty(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate
///
/// Validates the request against the category registry, issues exactly one
/// completion call, and returns the normalized result.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    let result = generate_content(&state.registry, state.llm.as_ref(), &request).await?;
    Ok(Json(result))
}

/// POST /api/v1/generate/batch
///
/// Submits N independent requests and returns N slots in input order, each
/// carrying either its result or its structured error.
pub async fn handle_generate_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchGenerateRequest>,
) -> Result<Json<BatchGenerateResponse>, AppError> {
    if request.requests.is_empty() {
        return Err(AppError::Validation("requests cannot be empty".to_string()));
    }

    let outcomes = generate_batch(&state.registry, state.llm.as_ref(), &request.requests).await;

    let results = outcomes
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| match outcome {
            Ok(result) => BatchSlot::Success { index, result },
            Err(err) => BatchSlot::Error {
                index,
                kind: err.code(),
                message: err.client_message(),
            },
        })
        .collect();

    Ok(Json(BatchGenerateResponse { results }))
}

/// GET /api/v1/categories
///
/// Lists the registered category ids.
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: state.registry.category_ids(),
    })
}

/// GET /api/v1/categories/:id
///
/// Returns the resolved policy for introspection: system instruction, valid
/// length keys with their descriptors, strategy, and source behavior.
pub async fn handle_get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryResponse>, AppError> {
    let policy = state.registry.resolve(&category_id)?;
    Ok(Json(CategoryResponse::from(policy)))
}
