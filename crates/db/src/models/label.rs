//! Label model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use contactbook_core::types::{DbId, Timestamp};

/// A row from the `labels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Label {
    pub id: DbId,
    pub name: String,
    pub is_deleted: bool,
    pub created_at: Timestamp,
}

/// Result of `LabelRepo::get_or_create`: the row plus whether this call inserted it.
#[derive(Debug, Clone, FromRow)]
pub struct LabelUpsert {
    #[sqlx(flatten)]
    pub label: Label,
    pub created: bool,
}

/// `{id, name}` projection returned by the label listing.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct LabelSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a label. Fields are optional so a missing name can be
/// reported as a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLabel {
    pub name: Option<String>,
}
