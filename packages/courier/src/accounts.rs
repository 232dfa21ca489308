//! In-memory courier account store.
//!
//! Accounts live only as long as the process. Logins are unique; ids are
//! assigned sequentially starting at 1 and are never reused.

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use dashmap::{DashMap, mapref::entry::Entry};
use derive_more::{Debug, Display};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An ID uniquely identifying a courier account.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Deserialize, Serialize)]
pub struct AccountId(i64);

impl AccountId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// A stored courier account.
#[derive(Clone, Debug)]
pub struct Account {
    pub id: AccountId,
    pub login: String,
    #[debug(skip)]
    pub password: String,
    pub first_name: String,
}

/// The login is already registered.
#[derive(Clone, Debug, Display)]
#[display("login already registered: {login}")]
pub struct LoginTaken {
    pub login: String,
}

impl std::error::Error for LoginTaken {}

/// Courier accounts keyed by login.
///
/// ## Cloning
///
/// Clones share the same underlying store.
#[derive(Clone, Debug, Default)]
pub struct Accounts {
    #[debug(skip)]
    by_login: Arc<DashMap<String, Account>>,

    #[debug(skip)]
    last_id: Arc<AtomicI64>,
}

impl Accounts {
    /// Register a new account.
    #[instrument(name = "Accounts::create", skip(self, password))]
    pub fn create(
        &self,
        login: &str,
        password: &str,
        first_name: &str,
    ) -> Result<AccountId, LoginTaken> {
        match self.by_login.entry(login.to_string()) {
            Entry::Occupied(_) => Err(LoginTaken {
                login: login.to_string(),
            }),
            Entry::Vacant(slot) => {
                let id = AccountId(self.last_id.fetch_add(1, Ordering::Relaxed) + 1);
                slot.insert(Account {
                    id,
                    login: login.to_string(),
                    password: password.to_string(),
                    first_name: first_name.to_string(),
                });
                Ok(id)
            }
        }
    }

    /// Look up the account matching both login and password.
    #[instrument(name = "Accounts::authenticate", skip(self, password))]
    pub fn authenticate(&self, login: &str, password: &str) -> Option<AccountId> {
        self.by_login
            .get(login)
            .filter(|account| account.password == password)
            .map(|account| account.id)
    }

    /// Remove the account with the given id, reporting whether it existed.
    #[instrument(name = "Accounts::remove", skip(self))]
    pub fn remove(&self, id: AccountId) -> bool {
        // Resolve the key first: removing while the iterator holds a shard
        // lock would deadlock.
        let login = self
            .by_login
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.key().clone());
        match login {
            Some(login) => self.by_login.remove(&login).is_some(),
            None => false,
        }
    }

    /// The number of registered accounts.
    pub fn len(&self) -> usize {
        self.by_login.len()
    }

    /// Whether no accounts are registered.
    pub fn is_empty(&self) -> bool {
        self.by_login.is_empty()
    }
}
