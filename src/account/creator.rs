//! Account creation port.

use async_trait::async_trait;

use crate::account::{Account, NewAccount};
use crate::error::CollaboratorError;

/// Capability to create accounts on a backing store.
#[async_trait]
pub trait AccountCreator: Send + Sync {
    /// Create an account from `account`, assigning its identifier.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the account could not be created, for any
    /// reason the backing store may have.
    async fn add(
        &self,
        account: NewAccount,
    ) -> std::result::Result<Account, CollaboratorError>;
}
