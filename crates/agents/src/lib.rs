//! Agents domain module.
//!
//! Agent applications arrive as `pending` and are approved (receiving an agent
//! code) or rejected exactly once.

pub mod agent;
pub mod code;
pub mod filter;

pub use agent::{
    Agent, AgentApproved, AgentCommand, AgentEvent, AgentRejected, AgentStatus, ApproveAgent,
    RejectAgent, APPROVE_PROMPT, REJECT_PROMPT, REJECTED_MESSAGE,
};
pub use code::{AgentCode, AgentCodeSequence, CountingSequence};
pub use filter::{AgentFilter, AGENTS_NOUN};
