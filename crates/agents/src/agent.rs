use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agribase_core::{Aggregate, AggregateRoot, AgentId, DomainError, Event, StatusBadge};

use crate::AgentCode;

pub const APPROVE_PROMPT: &str = "Are you sure you want to approve this agent application?";
pub const REJECT_PROMPT: &str = "Are you sure you want to reject this agent application?";
pub const REJECTED_MESSAGE: &str = "Agent application rejected.";

/// Agent application status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Pending,
    Approved,
    Rejected,
}

impl AgentStatus {
    pub const ALL: [AgentStatus; 3] = [AgentStatus::Pending, AgentStatus::Approved, AgentStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Pending => "pending",
            AgentStatus::Approved => "approved",
            AgentStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        self.badge().label
    }

    pub fn badge(&self) -> StatusBadge {
        match self {
            AgentStatus::Pending => StatusBadge::new("Pending", "status-pending"),
            AgentStatus::Approved => StatusBadge::new("Approved", "status-approved"),
            AgentStatus::Rejected => StatusBadge::new("Rejected", "status-rejected"),
        }
    }
}

impl FromStr for AgentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown agent status '{s}'")))
    }
}

impl core::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// An agent application row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default)]
    id: AgentId,
    name: String,
    email: String,
    phone: String,
    status: AgentStatus,
    #[serde(default)]
    code: Option<AgentCode>,
    #[serde(skip)]
    version: u64,
}

impl Agent {
    /// A fresh application: pending, without a code.
    pub fn applicant(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: AgentId::new(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            status: AgentStatus::Pending,
            code: None,
            version: 0,
        }
    }

    /// An agent approved before the page was loaded.
    pub fn approved(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        code: AgentCode,
    ) -> Self {
        Self {
            status: AgentStatus::Approved,
            code: Some(code),
            ..Self::applicant(name, email, phone)
        }
    }

    pub fn with_id(mut self, id: AgentId) -> Self {
        self.id = id;
        self
    }

    pub fn id_typed(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn status(&self) -> AgentStatus {
        self.status
    }

    pub fn status_label(&self) -> &str {
        self.status.label()
    }

    pub fn code(&self) -> Option<&AgentCode> {
        self.code.as_ref()
    }

    /// Approve/reject controls are offered only while this is true.
    pub fn is_reviewable(&self) -> bool {
        self.status == AgentStatus::Pending
    }
}

impl AggregateRoot for Agent {
    type Id = AgentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: ApproveAgent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveAgent {
    pub agent_id: AgentId,
    pub code: AgentCode,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RejectAgent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectAgent {
    pub agent_id: AgentId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentCommand {
    Approve(ApproveAgent),
    Reject(RejectAgent),
}

/// Event: AgentApproved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentApproved {
    pub agent_id: AgentId,
    pub code: AgentCode,
    pub occurred_at: DateTime<Utc>,
}

impl AgentApproved {
    pub fn message(&self) -> String {
        format!("Agent application approved. Agent code: {}", self.code)
    }
}

/// Event: AgentRejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRejected {
    pub agent_id: AgentId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentEvent {
    Approved(AgentApproved),
    Rejected(AgentRejected),
}

impl Event for AgentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AgentEvent::Approved(_) => "agents.agent.approved",
            AgentEvent::Rejected(_) => "agents.agent.rejected",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AgentEvent::Approved(e) => e.occurred_at,
            AgentEvent::Rejected(e) => e.occurred_at,
        }
    }
}

impl AgentEvent {
    pub fn message(&self) -> String {
        match self {
            AgentEvent::Approved(e) => e.message(),
            AgentEvent::Rejected(_) => REJECTED_MESSAGE.to_string(),
        }
    }
}

impl Aggregate for Agent {
    type Command = AgentCommand;
    type Event = AgentEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            AgentEvent::Approved(e) => {
                self.status = AgentStatus::Approved;
                self.code = Some(e.code.clone());
            }
            AgentEvent::Rejected(_) => {
                self.status = AgentStatus::Rejected;
            }
        }
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AgentCommand::Approve(cmd) => self.handle_approve(cmd),
            AgentCommand::Reject(cmd) => self.handle_reject(cmd),
        }
    }
}

impl Agent {
    fn ensure_agent_id(&self, agent_id: AgentId) -> Result<(), DomainError> {
        if self.id != agent_id {
            return Err(DomainError::invariant("agent_id mismatch"));
        }
        Ok(())
    }

    fn ensure_reviewable(&self) -> Result<(), DomainError> {
        if !self.is_reviewable() {
            return Err(DomainError::conflict(format!(
                "agent application is already {}",
                self.status.as_str()
            )));
        }
        Ok(())
    }

    fn handle_approve(&self, cmd: &ApproveAgent) -> Result<Vec<AgentEvent>, DomainError> {
        self.ensure_agent_id(cmd.agent_id)?;
        self.ensure_reviewable()?;

        Ok(vec![AgentEvent::Approved(AgentApproved {
            agent_id: cmd.agent_id,
            code: cmd.code.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_reject(&self, cmd: &RejectAgent) -> Result<Vec<AgentEvent>, DomainError> {
        self.ensure_agent_id(cmd.agent_id)?;
        self.ensure_reviewable()?;

        Ok(vec![AgentEvent::Rejected(AgentRejected {
            agent_id: cmd.agent_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant() -> Agent {
        Agent::applicant("Yaw Boateng", "yaw@agri.example", "+233 20 555 0101")
    }

    fn approve(agent: &Agent, code: &str) -> AgentCommand {
        AgentCommand::Approve(ApproveAgent {
            agent_id: agent.id_typed(),
            code: AgentCode::new(code).unwrap(),
            occurred_at: Utc::now(),
        })
    }

    fn reject(agent: &Agent) -> AgentCommand {
        AgentCommand::Reject(RejectAgent {
            agent_id: agent.id_typed(),
            occurred_at: Utc::now(),
        })
    }

    #[test]
    fn approval_sets_status_code_and_hides_controls() {
        let mut agent = applicant();
        assert!(agent.is_reviewable());

        let events = agent.execute(&approve(&agent, "AG006")).unwrap();
        assert_eq!(events[0].message(), "Agent application approved. Agent code: AG006");
        assert_eq!(events[0].event_type(), "agents.agent.approved");

        let badge = agent.status().badge();
        assert_eq!(badge.label, "Approved");
        assert!(badge.has_class("status-approved"));
        assert!(!badge.has_class("status-pending"));
        assert!(!badge.has_class("status-rejected"));
        assert!(!agent.is_reviewable());
        assert_eq!(agent.code().map(AgentCode::as_str), Some("AG006"));
        assert_eq!(agent.version(), 1);
    }

    #[test]
    fn rejection_keeps_agent_without_code() {
        let mut agent = applicant();
        let events = agent.execute(&reject(&agent)).unwrap();
        assert_eq!(events[0].message(), REJECTED_MESSAGE);
        assert_eq!(agent.status(), AgentStatus::Rejected);
        assert_eq!(agent.status().badge().css_class, "status-rejected");
        assert!(agent.code().is_none());
        assert!(!agent.is_reviewable());
    }

    #[test]
    fn decided_applications_cannot_be_reviewed_again() {
        let mut agent = applicant();
        agent.execute(&reject(&agent)).unwrap();

        let err = agent.handle(&approve(&agent, "AG001")).unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("rejected")),
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert!(agent.execute(&reject(&agent)).is_err());
        assert_eq!(agent.version(), 1);
    }

    #[test]
    fn command_for_other_agent_is_rejected() {
        let agent = applicant();
        let other = applicant();
        let err = agent.handle(&approve(&other, "AG001")).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let agent = applicant();
        let before = agent.clone();
        let first = agent.handle(&reject(&agent)).unwrap();
        let second = agent.handle(&reject(&agent)).unwrap();
        assert_eq!(agent, before);
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn approved_constructor_is_not_reviewable() {
        let agent = Agent::approved("Efua", "efua@agri.example", "020", AgentCode::new("AG001").unwrap());
        assert_eq!(agent.status(), AgentStatus::Approved);
        assert!(!agent.is_reviewable());
    }

    #[test]
    fn status_parses_from_filter_values() {
        assert_eq!("Approved".parse::<AgentStatus>().unwrap(), AgentStatus::Approved);
        assert!("suspended".parse::<AgentStatus>().is_err());
    }
}
