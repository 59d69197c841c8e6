//! Contact model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use contactbook_core::types::{DbId, Timestamp};

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub is_deleted: bool,
    pub created_at: Timestamp,
}

/// A contact together with the names of its labels, as returned by the listing.
#[derive(Debug, Clone, Serialize)]
pub struct ContactWithLabels {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Label names ordered by label id.
    pub labels: Vec<String>,
}

impl ContactWithLabels {
    pub fn new(contact: Contact, labels: Vec<String>) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            labels,
        }
    }
}

/// DTO for inserting a contact. All three fields are required.
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Request body for `POST contact/create`.
///
/// Fields are optional so missing values surface as validation errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Request body for `POST contact/add_label` and `POST contact/remove_label`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactLabelsRequest {
    /// Accepts a JSON integer or a string holding one (`"5"`).
    #[serde(default, deserialize_with = "id_or_numeric_string")]
    pub contact_id: Option<DbId>,
    #[serde(default)]
    pub labels: Vec<String>,
}

fn id_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(DbId),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid contact_id '{text}'"))),
    }
}
