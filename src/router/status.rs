//! Public configuration page for front-end identification and customization.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::config::Configuration;

/// Structured configuration.
#[derive(Serialize)]
pub struct Status {
    version: String,
    name: String,
    url: String,
}

/// Public server status (configuration).
pub async fn status(
    State(config): State<Arc<Configuration>>,
) -> Json<Status> {
    Json(Status {
        version: env!("CARGO_PKG_VERSION").into(),
        name: config.name.clone(),
        url: config.url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;

    use crate::account::MemoryAccounts;
    use crate::email::EmailFormat;
    use crate::{app, make_request, router};

    #[tokio::test]
    async fn test_status_route() {
        let app = app(router::state(
            Arc::new(EmailFormat),
            Arc::new(MemoryAccounts::default()),
        ));

        let response = make_request(
            app,
            Method::GET,
            "/status.json",
            String::default(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let bytes =
            response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["name"], "registra");
    }
}
