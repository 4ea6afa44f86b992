//! Account creation boundary.

mod creator;
mod memory;

pub use creator::*;
pub use memory::*;

use serde::{Deserialize, Serialize};

/// Account as returned by the creation collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque identifier, assigned by the creator and never here.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Stored representation, opaque to this service.
    pub password: String,
}

/// Input forwarded to the creation collaborator.
///
/// Deliberately narrower than the signup body: the confirmation field
/// never crosses this boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}
