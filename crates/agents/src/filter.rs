use agribase_filter::{Criterion, FilterSet};

use crate::Agent;

pub const AGENTS_NOUN: &str = "agents";

/// Inputs of the agent filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentFilter {
    pub status: String,
    pub search: String,
}

impl AgentFilter {
    pub fn criteria(&self) -> FilterSet<Agent> {
        FilterSet::new()
            .with(Criterion::equals("status", Agent::status_label, &self.status))
            .with(Criterion::contains(
                "search",
                &[Agent::name, Agent::email, Agent::phone],
                &self.search,
            ))
    }
}
