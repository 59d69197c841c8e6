//! Handlers for contacts and their label associations.
//!
//! Provides contact create/list/delete and attach/detach of labels by name.
//! Listing supports label filtering (`match=or|and`) and an email-only view.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contactbook_core::contact::{validate_label_names, validate_new_contact};
use contactbook_core::error::CoreError;
use contactbook_core::label_filter::{is_truthy, LabelFilter};
use contactbook_core::types::DbId;
use contactbook_db::models::contact::{ContactLabelsRequest, CreateContact, CreateContactRequest};
use contactbook_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::extract::LenientJson;
use crate::query::{ContactListParams, IdParams};
use crate::response::{ContactLabelsResponse, ContactResponse, DeletedResponse, EmailsResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Contact CRUD
// ---------------------------------------------------------------------------

/// POST /contactbook/contact/create
///
/// Create a contact. `name`, `phone`, and `email` are all required.
pub async fn create_contact(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<CreateContactRequest>,
) -> AppResult<impl IntoResponse> {
    validate_new_contact(
        input.name.as_deref(),
        input.phone.as_deref(),
        input.email.as_deref(),
    )?;

    let contact = ContactRepo::create(
        &state.pool,
        &CreateContact {
            name: input.name.unwrap_or_default(),
            phone: input.phone.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(contact_id = contact.id, "Contact created");

    Ok(Json(ContactResponse::from(contact)))
}

/// GET /contactbook/contact/list
///
/// List contacts, optionally filtered by label names. With `emails_only`
/// set, returns only the distinct email addresses of the matching contacts.
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> AppResult<Response> {
    let filter = LabelFilter::from_params(params.labels.as_deref(), params.match_mode.as_deref())?;
    let contacts = ContactRepo::filter(&state.pool, &filter).await?;

    if is_truthy(params.emails_only.as_deref()) {
        let emails = contacts.into_iter().map(|c| c.email).collect();
        return Ok(Json(EmailsResponse { emails }).into_response());
    }

    Ok(Json(contacts).into_response())
}

/// GET /contactbook/contact/del?id=<id>
///
/// Delete a contact and all its label associations.
pub async fn delete_contact(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let contact_id = params.parse_id()?;

    if !ContactRepo::delete(&state.pool, contact_id).await? {
        return Err(contact_not_found(contact_id));
    }

    tracing::info!(contact_id, "Contact deleted");

    Ok(Json(DeletedResponse::ok(contact_id)))
}

// ---------------------------------------------------------------------------
// Label associations
// ---------------------------------------------------------------------------

/// POST /contactbook/contact/add_label
///
/// Attach labels to a contact by name. Labels are created on first use.
pub async fn add_label(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<ContactLabelsRequest>,
) -> AppResult<impl IntoResponse> {
    let contact_id = validate_labels_request(&input)?;

    let labels = ContactRepo::add_labels(&state.pool, contact_id, &input.labels)
        .await?
        .ok_or_else(|| contact_not_found(contact_id))?;

    tracing::info!(
        contact_id,
        count = input.labels.len(),
        "Labels added to contact",
    );

    Ok(Json(ContactLabelsResponse { contact_id, labels }))
}

/// POST /contactbook/contact/remove_label
///
/// Detach labels from a contact by name. Unknown names are ignored.
pub async fn remove_label(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<ContactLabelsRequest>,
) -> AppResult<impl IntoResponse> {
    let contact_id = validate_labels_request(&input)?;

    let labels = ContactRepo::remove_labels(&state.pool, contact_id, &input.labels)
        .await?
        .ok_or_else(|| contact_not_found(contact_id))?;

    tracing::info!(
        contact_id,
        count = input.labels.len(),
        "Labels removed from contact",
    );

    Ok(Json(ContactLabelsResponse { contact_id, labels }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Check an add/remove body before any store call and return the contact id.
fn validate_labels_request(input: &ContactLabelsRequest) -> AppResult<DbId> {
    let contact_id = match input.contact_id {
        Some(id) if !input.labels.is_empty() => id,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "contact_id and labels are required".into(),
            )))
        }
    };
    validate_label_names(&input.labels)?;
    Ok(contact_id)
}

fn contact_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "contact",
        id,
    })
}
