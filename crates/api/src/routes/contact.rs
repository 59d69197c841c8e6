//! Route definitions for contacts, mounted at `/contact`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// ```text
/// POST   /create            -> create_contact
/// GET    /list              -> list_contacts
/// GET    /del               -> delete_contact
/// POST   /add_label         -> add_label
/// POST   /remove_label      -> remove_label
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(contacts::create_contact))
        .route("/list", get(contacts::list_contacts))
        .route("/del", get(contacts::delete_contact))
        .route("/add_label", post(contacts::add_label))
        .route("/remove_label", post(contacts::remove_label))
}
