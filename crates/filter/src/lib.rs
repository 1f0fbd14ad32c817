//! `agribase-filter`: the list filter engine shared by every admin page.
//!
//! A page builds a [`FilterSet`] from its filter inputs, each input becoming one
//! [`Criterion`] (a rule plus the record fields it reads). A record is visible
//! when every active criterion matches; unset inputs never constrain anything.
//! Records are never removed or reordered; [`Listing`] only flips visibility
//! and keeps the "Showing X of Y" summary.

pub mod criterion;
pub mod listing;
pub mod set;
pub mod summary;

pub use criterion::{Criterion, FieldFn, Rule};
pub use listing::Listing;
pub use set::{FilterOutcome, FilterSet};
pub use summary::ResultsSummary;
