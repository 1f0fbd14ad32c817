use chrono::{DateTime, Utc};

/// A fact emitted by an aggregate.
///
/// Nothing is stored or published; events exist so page controllers can log
/// and report exactly what a command changed.
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name (e.g. "agents.agent.approved").
    fn event_type(&self) -> &'static str;

    /// When the change happened.
    fn occurred_at(&self) -> DateTime<Utc>;
}
