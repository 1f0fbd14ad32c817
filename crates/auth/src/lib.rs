//! `agribase-auth`: the admin login gate.
//!
//! There is no real authentication: "logged in" is a flag in a key-value store.
//! The flag is read once into an [`AdminSession`] when the panel starts, and
//! pages take that session instead of consulting the store themselves.

pub mod gate;
pub mod page;
pub mod session;

pub use gate::{Navigation, Router};
pub use page::Page;
pub use session::{AccessError, AdminSession, LOGGED_IN_KEY};
pub use agribase_core::{InMemoryStore, KeyValueStore};
