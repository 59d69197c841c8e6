pub mod contact;
pub mod health;
pub mod label;

use axum::Router;

use crate::state::AppState;

/// URL prefix under which the contact book API is mounted.
pub const API_PREFIX: &str = "/contactbook";

/// Build the contact book route tree (mounted at [`API_PREFIX`]).
///
/// Route hierarchy:
///
/// ```text
/// /contact/create                                  create contact (POST)
/// /contact/list                                    list / filter contacts (GET)
/// /contact/del                                     delete contact (GET ?id=)
/// /contact/add_label                               attach labels by name (POST)
/// /contact/remove_label                            detach labels by name (POST)
///
/// /label/create                                    create-or-get label (POST)
/// /label/list                                      list labels (GET)
/// /label/del                                       delete label (GET ?id=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contact", contact::router())
        .nest("/label", label::router())
}
