use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod bookings;
pub mod buses;
pub mod tour_packages;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: one resource router per entity plus
/// health, wrapped in CORS and request tracing.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/buses", get(buses::list).post(buses::create))
        .route(
            "/buses/:id",
            get(buses::get).put(buses::update).delete(buses::delete),
        )
        .route(
            "/tour-packages",
            get(tour_packages::list).post(tour_packages::create),
        )
        .route(
            "/tour-packages/:id",
            get(tour_packages::get)
                .put(tour_packages::update)
                .delete(tour_packages::delete),
        )
        .route("/bookings", get(bookings::list).post(bookings::create))
        .route(
            "/bookings/:id",
            get(bookings::get).put(bookings::update).delete(bookings::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
