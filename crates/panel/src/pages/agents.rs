use chrono::Utc;
use serde::Serialize;

use agribase_auth::{AccessError, AdminSession};
use agribase_core::{Aggregate, AgentId, DomainError, DomainResult, StatusBadge};
use agribase_filter::{Listing, ResultsSummary};
use agribase_agents::{
    Agent, AgentApproved, AgentCode, AgentCodeSequence, AgentCommand, AgentEvent, AgentFilter,
    AgentRejected, ApproveAgent, CountingSequence, RejectAgent, AGENTS_NOUN, APPROVE_PROMPT,
    REJECT_PROMPT, REJECTED_MESSAGE,
};

use crate::Dialogs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentRowView {
    pub id: AgentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub badge: StatusBadge,
    pub code: Option<String>,
    pub approve_visible: bool,
    pub reject_visible: bool,
    pub hidden: bool,
}

/// The agent applications page.
#[derive(Debug, Clone)]
pub struct AgentsPage<Q = CountingSequence> {
    listing: Listing<Agent>,
    filter: AgentFilter,
    sequence: Q,
}

impl<Q: AgentCodeSequence> AgentsPage<Q> {
    pub fn open(session: &AdminSession, agents: Vec<Agent>, sequence: Q) -> Result<Self, AccessError> {
        session.require_logged_in()?;
        Ok(Self {
            listing: Listing::new(agents),
            filter: AgentFilter::default(),
            sequence,
        })
    }

    pub fn filter_mut(&mut self) -> &mut AgentFilter {
        &mut self.filter
    }

    pub fn apply_filters(&mut self) -> ResultsSummary {
        self.listing.apply(&self.filter.criteria(), AGENTS_NOUN)
    }

    pub fn summary(&self) -> Option<ResultsSummary> {
        self.listing.summary()
    }

    pub fn listing(&self) -> &Listing<Agent> {
        &self.listing
    }

    /// Codes already present on the page.
    pub fn issued_codes(&self) -> Vec<AgentCode> {
        self.listing
            .records()
            .iter()
            .filter_map(|a| a.code().cloned())
            .collect()
    }

    /// Approve a pending application after confirmation.
    ///
    /// `Ok(None)` means the admin declined.
    pub fn approve(
        &mut self,
        id: AgentId,
        dialogs: &mut impl Dialogs,
    ) -> DomainResult<Option<AgentApproved>> {
        let index = self.reviewable_index(id)?;
        if !dialogs.confirm(APPROVE_PROMPT) {
            return Ok(None);
        }

        let code = self.sequence.next_code(&self.issued_codes());
        let command = AgentCommand::Approve(ApproveAgent {
            agent_id: id,
            code,
            occurred_at: Utc::now(),
        });
        match self.execute(index, &command)? {
            Some(AgentEvent::Approved(approved)) => {
                tracing::info!(agent = %id, code = %approved.code, "agent approved");
                dialogs.alert(&approved.message());
                Ok(Some(approved))
            }
            _ => Ok(None),
        }
    }

    /// Reject a pending application after confirmation.
    pub fn reject(
        &mut self,
        id: AgentId,
        dialogs: &mut impl Dialogs,
    ) -> DomainResult<Option<AgentRejected>> {
        let index = self.reviewable_index(id)?;
        if !dialogs.confirm(REJECT_PROMPT) {
            return Ok(None);
        }

        let command = AgentCommand::Reject(RejectAgent {
            agent_id: id,
            occurred_at: Utc::now(),
        });
        match self.execute(index, &command)? {
            Some(AgentEvent::Rejected(rejected)) => {
                tracing::info!(agent = %id, "agent rejected");
                dialogs.alert(REJECTED_MESSAGE);
                Ok(Some(rejected))
            }
            _ => Ok(None),
        }
    }

    pub fn rows(&self) -> Vec<AgentRowView> {
        self.listing
            .rows()
            .map(|(agent, visible)| AgentRowView {
                id: agent.id_typed(),
                name: agent.name().to_string(),
                email: agent.email().to_string(),
                phone: agent.phone().to_string(),
                badge: agent.status().badge(),
                code: agent.code().map(|c| c.to_string()),
                approve_visible: agent.is_reviewable(),
                reject_visible: agent.is_reviewable(),
                hidden: !visible,
            })
            .collect()
    }

    fn reviewable_index(&self, id: AgentId) -> DomainResult<usize> {
        let index = self
            .listing
            .position(|a| a.id_typed() == id)
            .ok_or_else(|| DomainError::not_found(format!("agent {id}")))?;
        let agent = &self.listing.records()[index];
        if !agent.is_reviewable() {
            return Err(DomainError::conflict(format!(
                "agent application is already {}",
                agent.status().as_str()
            )));
        }
        Ok(index)
    }

    fn execute(&mut self, index: usize, command: &AgentCommand) -> DomainResult<Option<AgentEvent>> {
        let agent = self
            .listing
            .record_mut(index)
            .ok_or_else(|| DomainError::not_found(format!("agent row {index}")))?;
        Ok(agent.execute(command)?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agribase_agents::AgentStatus;
    use agribase_auth::InMemoryStore;

    use crate::ScriptedDialogs;

    fn page() -> AgentsPage {
        let mut store = InMemoryStore::new();
        let mut session = AdminSession::logged_out();
        session.sign_in(&mut store);
        let agents = vec![
            Agent::approved(
                "Esi Addo",
                "esi@agri.example",
                "+233 24 000 1111",
                AgentCode::new("AG001").unwrap(),
            ),
            Agent::applicant("Yaw Boateng", "yaw@agri.example", "+233 20 555 0101"),
            Agent::applicant("Abena Darko", "abena@agri.example", "+233 27 123 4567"),
        ];
        AgentsPage::open(&session, agents, CountingSequence::default()).unwrap()
    }

    #[test]
    fn approval_assigns_next_code_and_hides_controls() {
        let mut page = page();
        let mut dialogs = ScriptedDialogs::confirming();
        let id = page.rows()[1].id;

        let approved = page.approve(id, &mut dialogs).unwrap().unwrap();
        assert_eq!(approved.code.as_str(), "AG002");
        assert_eq!(dialogs.prompts(), [APPROVE_PROMPT]);
        assert_eq!(dialogs.last_alert(), Some("Agent application approved. Agent code: AG002"));

        let row = &page.rows()[1];
        assert_eq!(row.badge.label, "Approved");
        assert!(row.badge.has_class("status-approved"));
        assert_eq!(row.code.as_deref(), Some("AG002"));
        assert!(!row.approve_visible && !row.reject_visible);
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let mut page = page();
        let mut dialogs = ScriptedDialogs::declining();
        let id = page.rows()[2].id;

        assert_eq!(page.reject(id, &mut dialogs), Ok(None));
        assert_eq!(page.listing().records()[2].status(), AgentStatus::Pending);
        assert!(dialogs.alerts().is_empty());
    }

    #[test]
    fn rejection_keeps_code_empty() {
        let mut page = page();
        let mut dialogs = ScriptedDialogs::confirming();
        let id = page.rows()[2].id;

        page.reject(id, &mut dialogs).unwrap().unwrap();
        assert_eq!(dialogs.last_alert(), Some("Agent application rejected."));
        let row = &page.rows()[2];
        assert_eq!(row.badge.label, "Rejected");
        assert_eq!(row.code, None);
        assert!(!row.approve_visible);
    }

    #[test]
    fn reviewed_application_is_not_asked_again() {
        let mut page = page();
        let mut dialogs = ScriptedDialogs::confirming();
        let id = page.rows()[0].id;

        assert!(matches!(page.approve(id, &mut dialogs), Err(DomainError::Conflict(_))));
        assert!(dialogs.prompts().is_empty());
        assert!(matches!(
            page.reject(AgentId::new(), &mut dialogs),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn search_spans_name_email_and_phone() {
        let mut page = page();
        page.filter_mut().search = "555".into();
        assert_eq!(page.apply_filters().to_string(), "Showing 1 of 3 agents");
        page.filter_mut().search = String::new();
        page.filter_mut().status = "pending".into();
        assert_eq!(page.apply_filters().visible, 2);
    }
}
