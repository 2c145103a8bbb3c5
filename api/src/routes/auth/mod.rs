//! `/auth` routes. Public: they issue the tokens the lecturer routes require.

pub mod post;

use axum::{Router, routing::post};
use util::state::AppState;

use post::login;

/// - `POST /auth/login` → `login`
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}
