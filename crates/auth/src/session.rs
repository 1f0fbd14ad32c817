use chrono::{DateTime, Utc};
use thiserror::Error;

use agribase_core::DomainError;

use crate::KeyValueStore;

/// Store key holding the login flag.
pub const LOGGED_IN_KEY: &str = "adminLoggedIn";

const LOGGED_IN_VALUE: &str = "true";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("admin is not logged in")]
    NotLoggedIn,
}

impl From<AccessError> for DomainError {
    fn from(_: AccessError) -> Self {
        DomainError::Unauthorized
    }
}

/// Login state of the running panel.
///
/// Created when the panel starts and handed to every page that needs an
/// authorized admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    logged_in: bool,
    since: Option<DateTime<Utc>>,
}

impl AdminSession {
    pub fn logged_out() -> Self {
        Self {
            logged_in: false,
            since: None,
        }
    }

    /// Read the login flag. Only the exact value `"true"` counts as logged in.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        match store.get(LOGGED_IN_KEY).as_deref() {
            Some(LOGGED_IN_VALUE) => Self {
                logged_in: true,
                since: Some(Utc::now()),
            },
            _ => Self::logged_out(),
        }
    }

    pub fn sign_in(&mut self, store: &mut impl KeyValueStore) {
        store.set(LOGGED_IN_KEY, LOGGED_IN_VALUE);
        self.logged_in = true;
        self.since = Some(Utc::now());
        tracing::info!("admin signed in");
    }

    pub fn sign_out(&mut self, store: &mut impl KeyValueStore) {
        store.remove(LOGGED_IN_KEY);
        self.logged_in = false;
        self.since = None;
        tracing::info!("admin signed out");
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn since(&self) -> Option<DateTime<Utc>> {
        self.since
    }

    pub fn require_logged_in(&self) -> Result<(), AccessError> {
        if self.logged_in {
            Ok(())
        } else {
            Err(AccessError::NotLoggedIn)
        }
    }
}
