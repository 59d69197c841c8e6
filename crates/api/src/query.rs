//! Query parameter types for API handlers.
//!
//! Every field is kept as a raw optional string and interpreted by the
//! handler, so malformed values produce the API's own validation errors
//! rather than extractor rejections.

use contactbook_core::contact::require_field;
use contactbook_core::error::CoreError;
use contactbook_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET contact/list`
/// (`?labels=a,b&match=and|or&emails_only=1`).
#[derive(Debug, Default, Deserialize)]
pub struct ContactListParams {
    pub labels: Option<String>,
    #[serde(rename = "match")]
    pub match_mode: Option<String>,
    pub emails_only: Option<String>,
}

/// Query parameters for the delete endpoints (`?id=<id>`).
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    /// The required `id`, parsed as a database id.
    pub fn parse_id(&self) -> Result<DbId, CoreError> {
        let raw = require_field("id", self.id.as_deref())?;
        raw.trim()
            .parse::<DbId>()
            .map_err(|_| CoreError::Validation(format!("id must be an integer, got '{raw}'")))
    }
}
