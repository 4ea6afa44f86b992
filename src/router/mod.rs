//! HTTP routes.

pub mod signup;
pub mod status;

/// Assemble an [`crate::AppState`] around arbitrary collaborators.
#[cfg(test)]
pub(crate) fn state(
    email: std::sync::Arc<dyn crate::email::EmailValidator>,
    accounts: std::sync::Arc<dyn crate::account::AccountCreator>,
) -> crate::AppState {
    crate::AppState {
        config: std::sync::Arc::new(crate::config::Configuration::default()),
        email,
        accounts,
    }
}
