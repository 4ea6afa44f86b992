use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::AppState;
use crate::account::{Account, NewAccount};
use crate::error::{Result, ServerError};

/// Raw signup request body.
///
/// Presence is checked by the handler, not by serde, so that a missing
/// field maps to the contractual error instead of a rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

/// Required-field guard. An empty string counts as absent.
fn require<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ServerError::MissingParameter { field }),
    }
}

/// Handler to sign up a new account.
///
/// Checks required fields in a fixed order (first failure wins), asks
/// the email validator for a verdict, then delegates creation. Always
/// resolves to exactly one of 200, 400 or 500.
pub async fn handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Body>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>)> {
    let Json(body) = payload?;

    let name = require("name", &body.name)?;
    let email = require("email", &body.email)?;
    let password = require("password", &body.password)?;
    require("passwordConfirm", &body.password_confirm)?;

    if !state.email.is_valid(email)? {
        return Err(ServerError::InvalidParameter { field: "email" });
    }

    // `passwordConfirm` stays behind: it only exists for client-side
    // confirmation.
    let account = state
        .accounts
        .add(NewAccount {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
        .await?;

    Ok((StatusCode::OK, Json(account)))
}
