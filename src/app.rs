//! HTTP router construction.
//!
//! Routes are registered here rather than in `main` so tests can build the
//! exact router the server runs, backed by a fresh `CardStore`.

use std::any::Any;

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{MethodRouter, get},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::{INTERNAL_ERROR_MESSAGE, error_response},
    handlers,
    store::CardStore,
};

/// Build the full application router over `store`.
///
/// # Routes
///
/// - `GET /health`
/// - `GET /cards`, `POST /cards`
/// - `GET /cards/{id}`, `DELETE /cards/{id}`
///
/// Card paths also match with a single trailing slash. Anything else falls
/// through to a JSON 404.
pub fn build_router(store: CardStore) -> Router {
    let collection = || -> MethodRouter<CardStore> {
        get(handlers::cards::list_cards).post(handlers::cards::create_card)
    };
    let item = || -> MethodRouter<CardStore> {
        get(handlers::cards::get_card).delete(handlers::cards::delete_card)
    };

    let routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/cards", collection())
        .route("/cards/", collection())
        .route("/cards/{id}", item())
        .route("/cards/{id}/", item())
        .fallback(not_found)
        .with_state(store);

    with_middleware(routes)
}

/// Wrap a router in the middleware stack shared by every route.
///
/// Outermost first: request tracing, permissive CORS (any origin), then
/// conversion of handler panics into a JSON 500.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(%detail, "Handler panicked");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}
