use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::signup::signup;
use crate::credentials::service::AuthService;
use crate::outbound::repositories::SqliteCredentialRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<SqliteCredentialRepository>>,
}

pub fn create_router(auth_service: Arc<AuthService<SqliteCredentialRepository>>) -> Router {
    let state = AppState { auth_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .layer(trace_layer)
        // Any origin is accepted; development-mode policy, tighten before
        // exposing this service beyond localhost.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
