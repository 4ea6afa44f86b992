//! Error handler for registra.

use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Failure raised by an injected collaborator.
///
/// The wrapped error is kept for logging only; it is never serialized
/// into a response body.
#[derive(Debug, Error)]
#[error("collaborator failed: {0}")]
pub struct CollaboratorError(Box<dyn std::error::Error + Send + Sync>);

impl CollaboratorError {
    /// Wrap any failure coming out of a collaborator.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(err.into())
    }
}

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("missing parameter: {field}")]
    MissingParameter { field: &'static str },

    #[error("invalid parameter: {field}")]
    InvalidParameter { field: &'static str },

    #[error(transparent)]
    Axum(#[from] JsonRejection),

    #[error("internal server error")]
    Internal(#[from] CollaboratorError),
}

/// Structure for detailed error responses.
#[derive(Debug, Serialize)]
pub struct ResponseError {
    title: String,
    status: u16,
    detail: Option<String>,
    field: Option<&'static str>,
}

impl ResponseError {
    /// Update error status code.
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status = code.as_u16();
        self
    }

    /// Update `title` field.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    /// Add detailed error.
    pub fn details(mut self, description: &str) -> Self {
        self.detail = Some(description.into());
        self
    }

    /// Name the offending request field.
    pub fn field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Transform [`ResponseError`] into axum [`Response`].
    pub fn into_response(
        self,
    ) -> std::result::Result<Response, axum::http::Error> {
        if let Ok(body) = serde_json::to_string(&self) {
            Response::builder()
                .status(self.status)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
        } else {
            Ok(internal_server_error())
        }
    }
}

impl Default for ResponseError {
    fn default() -> Self {
        Self {
            title: "Internal server error.".to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: None,
            field: None,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let response =
            ResponseError::default().status(StatusCode::BAD_REQUEST);

        let response = match &self {
            ServerError::MissingParameter { field } => response
                .title("Missing required parameter.")
                .details(&self.to_string())
                .field(*field),

            ServerError::InvalidParameter { field } => response
                .title("Invalid parameter.")
                .details(&self.to_string())
                .field(*field),

            ServerError::Axum(rejection) => response
                .title("Malformed request body.")
                .details(&rejection.body_text()),

            ServerError::Internal(source) => {
                tracing::error!(error = %source, "server returned 500 status");

                ResponseError::default()
            },
        };

        response
            .into_response()
            .unwrap_or_else(|_| internal_server_error())
    }
}

fn internal_server_error() -> Response {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(
            serde_json::json!({
                "title": "Internal server error.",
                "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "detail": null,
                "field": null,
            })
            .to_string()
            .into(),
        )
        .unwrap_or_else(|_| Response::new("Internal server error".into()))
}
