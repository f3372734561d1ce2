//! phq-server
//!
//! HTTP host for the PHQ-9 questionnaire. Serves the questionnaire
//! definition, threads the caller-owned session state through the survey
//! and result steps, scores submissions and exports results. Nothing is
//! stored server-side.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod safety;
pub mod state;
pub mod telemetry;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaire definitions
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        // Stateless scoring
        .route("/score", post(routes::score::score))
        // Session flow
        .route("/sessions", post(routes::sessions::create_session))
        .route("/sessions/answer", post(routes::sessions::answer))
        .route("/sessions/functional", post(routes::sessions::functional))
        .route("/sessions/submit", post(routes::sessions::submit))
        .route("/sessions/edit", post(routes::sessions::edit))
        .route("/sessions/result", post(routes::sessions::result))
        // Export
        .route("/export/{format}", post(routes::export::export_result))
        .layer(axum_mw::from_fn(middleware::access_log::access_log))
        .layer(cors)
        .with_state(state)
}
