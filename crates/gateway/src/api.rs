//! JSON API for templates, saved prompts and live preview.
//!
//! Endpoints:
//!
//! - `GET    /api/templates`                — List built-in templates (`?category=`)
//! - `GET    /api/templates/{id}`           — Get one template
//! - `GET    /api/prompts`                  — List saved prompts, newest first (`?q=&category=`)
//! - `POST   /api/prompts`                  — Save a new prompt
//! - `GET    /api/prompts/{id}`             — Get a saved prompt
//! - `PUT    /api/prompts/{id}`             — Partially update a saved prompt
//! - `DELETE /api/prompts/{id}`             — Delete a saved prompt
//! - `POST   /api/prompts/{id}/duplicate`   — Save a copy titled "... (copy)"
//! - `POST   /api/preview`                  — Assemble text, estimate size, compute hints
//!
//! Every error body is `{"error": "..."}`, including malformed JSON bodies.

use axum::{
    Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use promptdeck_assembler::{FillValues, Hint, PromptEditorState};
use promptdeck_core::error::{EditorError, Error, StoreError};
use promptdeck_core::prompt::{
    DEFAULT_USER_ID, PromptDefinition, PromptFilter, PromptUpdate, Sections, StoredPrompt,
    VariableDefinition,
};
use promptdeck_core::store::{self, PromptStore};
use promptdeck_core::template::Template;

// ── State ─────────────────────────────────────────────────────────────────

/// Shared state for the API routes.
pub struct ApiState {
    pub store: Arc<dyn PromptStore>,
}

pub type SharedApiState = Arc<ApiState>;

// ── Router ────────────────────────────────────────────────────────────────

/// Build the API router. Nest this under "/api" in the main router.
pub fn api_router(state: SharedApiState) -> Router {
    Router::new()
        .route("/templates", get(list_templates_handler))
        .route("/templates/{id}", get(get_template_handler))
        .route(
            "/prompts",
            get(list_prompts_handler).post(create_prompt_handler),
        )
        .route(
            "/prompts/{id}",
            get(get_prompt_handler)
                .put(update_prompt_handler)
                .delete(delete_prompt_handler),
        )
        .route("/prompts/{id}/duplicate", post(duplicate_prompt_handler))
        .route("/preview", post(preview_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "Prompt not found")
}

fn store_failure(e: StoreError) -> ApiError {
    error!(error = %e, "Prompt store operation failed");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

fn core_failure(e: Error) -> ApiError {
    match e {
        Error::Editor(EditorError::TitleRequired) => {
            api_error(StatusCode::BAD_REQUEST, "Title is required")
        }
        Error::Editor(e) => api_error(StatusCode::BAD_REQUEST, e.to_string()),
        Error::Store(e) => store_failure(e),
    }
}

/// Unwrap a JSON body, answering malformed or mistyped input with a 400
/// in the usual error shape.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))
}

#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    pub sections: Sections,
    #[serde(default)]
    pub variable_definitions: Vec<VariableDefinition>,
    /// Omitted: seed from the variables' defaults.
    #[serde(default)]
    pub fill_values: Option<FillValues>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub text: String,
    pub char_count: usize,
    pub estimated_tokens: usize,
    pub hints: Vec<Hint>,
}

// ── Template handlers ─────────────────────────────────────────────────────

async fn list_templates_handler(
    Query(query): Query<TemplateQuery>,
) -> Json<Vec<&'static Template>> {
    Json(promptdeck_templates::by_category(query.category.as_deref()))
}

async fn get_template_handler(
    Path(id): Path<String>,
) -> Result<Json<&'static Template>, ApiError> {
    promptdeck_templates::find(&id)
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Template not found"))
}

// ── Prompt handlers ───────────────────────────────────────────────────────

async fn list_prompts_handler(
    State(state): State<SharedApiState>,
    Query(filter): Query<PromptFilter>,
) -> Result<Json<Vec<StoredPrompt>>, ApiError> {
    let prompts = state
        .store
        .list(DEFAULT_USER_ID)
        .await
        .map_err(store_failure)?;
    Ok(Json(filter.apply(prompts)))
}

async fn get_prompt_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
) -> Result<Json<StoredPrompt>, ApiError> {
    state
        .store
        .get(&id, DEFAULT_USER_ID)
        .await
        .map_err(store_failure)?
        .map(Json)
        .ok_or_else(not_found)
}

async fn create_prompt_handler(
    State(state): State<SharedApiState>,
    payload: Result<Json<PromptDefinition>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredPrompt>), ApiError> {
    let definition = json_body(payload)?;
    let prompt = store::save_new(state.store.as_ref(), DEFAULT_USER_ID, definition)
        .await
        .map_err(core_failure)?;

    info!(id = %prompt.id, title = %prompt.title, "Prompt saved");
    Ok((StatusCode::CREATED, Json(prompt)))
}

async fn duplicate_prompt_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<StoredPrompt>), ApiError> {
    let copy = store::duplicate(state.store.as_ref(), &id, DEFAULT_USER_ID)
        .await
        .map_err(core_failure)?
        .ok_or_else(not_found)?;

    info!(from = %id, id = %copy.id, "Prompt duplicated");
    Ok((StatusCode::CREATED, Json(copy)))
}

async fn update_prompt_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
    payload: Result<Json<PromptUpdate>, JsonRejection>,
) -> Result<Json<StoredPrompt>, ApiError> {
    let update = json_body(payload)?;
    let mut prompt = state
        .store
        .get(&id, DEFAULT_USER_ID)
        .await
        .map_err(store_failure)?
        .ok_or_else(not_found)?;

    prompt.apply(update);
    state
        .store
        .put(prompt.clone())
        .await
        .map_err(store_failure)?;

    info!(id = %prompt.id, "Prompt updated");
    Ok(Json(prompt))
}

async fn delete_prompt_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state
        .store
        .get(&id, DEFAULT_USER_ID)
        .await
        .map_err(store_failure)?
        .is_none()
    {
        return Err(not_found());
    }

    state.store.delete(&id).await.map_err(store_failure)?;
    info!(id = %id, "Prompt deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ── Preview ───────────────────────────────────────────────────────────────

async fn preview_handler(
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let req = json_body(payload)?;
    let mut editor = PromptEditorState::from_definition(PromptDefinition {
        sections: req.sections,
        variable_definitions: req.variable_definitions,
        ..PromptDefinition::default()
    });
    if let Some(fill_values) = req.fill_values {
        editor.set_fill_values(fill_values);
    }

    let preview = editor.preview();
    Ok(Json(PreviewResponse {
        text: preview.text,
        char_count: preview.estimate.char_count,
        estimated_tokens: preview.estimate.estimated_tokens,
        hints: preview.hints,
    }))
}
