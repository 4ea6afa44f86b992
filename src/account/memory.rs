//! In-process account store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::account::{Account, AccountCreator, NewAccount};
use crate::error::CollaboratorError;

const ID_LENGTH: usize = 16;

/// Account store keeping accounts in process memory, keyed by email.
///
/// Stand-in for a real downstream creation service. The route only
/// sees the [`AccountCreator`] contract.
#[derive(Debug, Default)]
pub struct MemoryAccounts {
    accounts: Mutex<HashMap<String, Account>>,
}

#[async_trait]
impl AccountCreator for MemoryAccounts {
    async fn add(
        &self,
        account: NewAccount,
    ) -> std::result::Result<Account, CollaboratorError> {
        let mut accounts = self
            .accounts
            .lock()
            .map_err(|_| CollaboratorError::new("account store poisoned"))?;

        if accounts.contains_key(&account.email) {
            return Err(CollaboratorError::new("email already registered"));
        }

        let mut bytes = [0u8; ID_LENGTH];
        OsRng.fill_bytes(&mut bytes);

        let created = Account {
            id: hex::encode(bytes),
            name: account.name,
            email: account.email,
            password: account.password,
        };
        accounts.insert(created.email.clone(), created.clone());

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account() -> NewAccount {
        NewAccount {
            name: "nome_valido".into(),
            email: "email_valido@email.com".into(),
            password: "senha_valida".into(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_opaque_id() {
        let store = MemoryAccounts::default();

        let account = store.add(new_account()).await.unwrap();

        assert_eq!(account.id.len(), ID_LENGTH * 2);
        assert!(account.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(account.name, "nome_valido");
        assert_eq!(account.email, "email_valido@email.com");
        assert_eq!(account.password, "senha_valida");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = MemoryAccounts::default();
        store.add(new_account()).await.unwrap();

        let mut other = new_account();
        other.name = "outro_nome".into();
        let err = store.add(other).await.unwrap_err();

        assert!(err.to_string().contains("email already registered"));
    }

    #[tokio::test]
    async fn test_distinct_emails_get_distinct_ids() {
        let store = MemoryAccounts::default();

        let first = store.add(new_account()).await.unwrap();
        let mut other = new_account();
        other.email = "outro_email@email.com".into();
        let second = store.add(other).await.unwrap();

        assert_ne!(first.id, second.id);
    }
}
