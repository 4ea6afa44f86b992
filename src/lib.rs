//! Registra is a lightweight signup gateway for account services.

#![forbid(unsafe_code)]

pub mod account;
pub mod config;
pub mod email;
pub mod error;
mod router;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, middleware as AxumMiddleware};
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

use account::{AccountCreator, MemoryAccounts};
use email::{EmailFormat, EmailValidator};

/// MUST NEVER be used in production.
#[cfg(test)]
pub(crate) async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use axum::http::header;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State sharing between routes.
///
/// Holds the two collaborator references, acquired at construction and
/// never reassigned.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub email: Arc<dyn EmailValidator>,
    pub accounts: Arc<dyn AccountCreator>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        );

    Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        // `POST /signup` goes to `signup`.
        .route("/signup", post(router::signup::handler))
        .with_state(state)
        .route_layer(AxumMiddleware::from_fn(telemetry::track))
        .layer(middleware)
}

/// Initialize the application state with production collaborators.
pub fn initialize_state() -> Result<AppState, Box<dyn std::error::Error>> {
    // read configuration file. let it in memory.
    let config = config::Configuration::default().read()?;

    Ok(AppState {
        config,
        email: Arc::new(EmailFormat),
        accounts: Arc::new(MemoryAccounts::default()),
    })
}
