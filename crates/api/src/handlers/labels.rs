//! Handlers for labels.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use contactbook_core::contact::require_field;
use contactbook_core::error::CoreError;
use contactbook_db::models::label::CreateLabel;
use contactbook_db::repositories::LabelRepo;

use crate::error::{AppError, AppResult};
use crate::extract::LenientJson;
use crate::query::IdParams;
use crate::response::{DeletedResponse, LabelCreatedResponse};
use crate::state::AppState;

/// POST /contactbook/label/create
///
/// Idempotent: an existing label with the same name is returned with
/// `created: false`.
pub async fn create_label(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<CreateLabel>,
) -> AppResult<impl IntoResponse> {
    let name = require_field("name", input.name.as_deref())?;

    let mut conn = state.pool.acquire().await?;
    let upsert = LabelRepo::get_or_create(&mut *conn, name).await?;

    tracing::info!(
        label_id = upsert.label.id,
        created = upsert.created,
        "Label create-or-get",
    );

    Ok(Json(LabelCreatedResponse::from(upsert)))
}

/// GET /contactbook/label/list
///
/// All labels as `{id, name}`, in insertion order.
pub async fn list_labels(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let labels = LabelRepo::list(&state.pool).await?;

    Ok(Json(labels))
}

/// GET /contactbook/label/del?id=<id>
///
/// Delete a label and remove it from every contact.
pub async fn delete_label(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let label_id = params.parse_id()?;

    if !LabelRepo::delete(&state.pool, label_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "label",
            id: label_id,
        }));
    }

    tracing::info!(label_id, "Label deleted");

    Ok(Json(DeletedResponse::ok(label_id)))
}
