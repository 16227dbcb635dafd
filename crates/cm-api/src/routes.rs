//! API routes

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::extractors::AppState;
use crate::handlers::{addresses, contacts, users};

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api", api_router())
}

fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users_router())
        .nest("/contacts", contacts_router())
}

fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register))
        .route("/login", post(users::login))
        .route("/current", get(users::current).patch(users::update_current))
        .route("/logout", delete(users::logout))
}

fn contacts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::search).post(contacts::create))
        .route(
            "/:id",
            get(contacts::get).put(contacts::update).delete(contacts::delete),
        )
        .route(
            "/:id/addresses",
            get(addresses::list).post(addresses::create),
        )
        .route(
            "/:id/addresses/:address_id",
            get(addresses::get)
                .put(addresses::update)
                .delete(addresses::delete),
        )
}
