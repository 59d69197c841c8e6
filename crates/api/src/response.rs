//! Response payload types for API handlers.
//!
//! Payloads are returned bare (no envelope) in the shapes clients of the
//! contact book already rely on.

use contactbook_core::types::DbId;
use contactbook_db::models::contact::Contact;
use contactbook_db::models::label::LabelUpsert;
use indexmap::IndexSet;
use serde::Serialize;

/// `{id, name, email, phone}` returned by `POST contact/create`.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

/// `{emails: [...]}` returned by `GET contact/list?emails_only=1`.
///
/// Distinct addresses in listing order.
#[derive(Debug, Serialize)]
pub struct EmailsResponse {
    pub emails: IndexSet<String>,
}

/// `{id, name, created}` returned by `POST label/create`.
#[derive(Debug, Serialize)]
pub struct LabelCreatedResponse {
    pub id: DbId,
    pub name: String,
    /// `false` when the label already existed.
    pub created: bool,
}

impl From<LabelUpsert> for LabelCreatedResponse {
    fn from(upsert: LabelUpsert) -> Self {
        Self {
            id: upsert.label.id,
            name: upsert.label.name,
            created: upsert.created,
        }
    }
}

/// `{status: "ok", deleted_id}` returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
    pub deleted_id: DbId,
}

impl DeletedResponse {
    pub fn ok(deleted_id: DbId) -> Self {
        Self {
            status: "ok",
            deleted_id,
        }
    }
}

/// `{contact_id, labels}` returned after adding or removing labels.
#[derive(Debug, Serialize)]
pub struct ContactLabelsResponse {
    pub contact_id: DbId,
    /// The contact's label names after the change.
    pub labels: Vec<String>,
}
