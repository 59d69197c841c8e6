//! Route definitions for labels, mounted at `/label`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::labels;
use crate::state::AppState;

/// ```text
/// POST   /create            -> create_label
/// GET    /list              -> list_labels
/// GET    /del               -> delete_label
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(labels::create_label))
        .route("/list", get(labels::list_labels))
        .route("/del", get(labels::delete_label))
}
