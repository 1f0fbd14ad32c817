//! `agribase-core`: building blocks shared by the admin panel domain crates.
//!
//! Everything here is **pure**: no rendering, no logging setup. The only storage
//! is the [`KeyValueStore`] seam pages persist preferences through.

pub mod aggregate;
pub mod badge;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod store;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use badge::StatusBadge;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use id::{AgentId, ProductId};
pub use store::{InMemoryStore, KeyValueStore};
pub use value_object::ValueObject;
