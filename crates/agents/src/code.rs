use serde::{Deserialize, Serialize};

use agribase_core::{DomainError, ValueObject};

/// Code handed to an agent when their application is approved (e.g. `AG006`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentCode(String);

impl AgentCode {
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("agent code cannot be empty"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for AgentCode {}

impl TryFrom<String> for AgentCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgentCode> for String {
    fn from(value: AgentCode) -> Self {
        value.0
    }
}

impl core::fmt::Display for AgentCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of the next agent code.
pub trait AgentCodeSequence {
    /// `issued` holds every code already assigned on the page.
    fn next_code(&self, issued: &[AgentCode]) -> AgentCode;
}

/// Prefix plus zero-padded ordinal, where the ordinal is one more than the
/// number of codes already issued.
///
/// Not a real identifier: it only stays unique while codes are issued by this
/// sequence. If seeded data already holds the candidate, the ordinal moves on
/// to the first free one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingSequence {
    prefix: String,
    width: usize,
}

impl CountingSequence {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    pub fn format(&self, ordinal: usize) -> String {
        format!("{}{:0width$}", self.prefix, ordinal, width = self.width)
    }
}

impl Default for CountingSequence {
    fn default() -> Self {
        Self::new("AG", 3)
    }
}

impl AgentCodeSequence for CountingSequence {
    fn next_code(&self, issued: &[AgentCode]) -> AgentCode {
        let mut ordinal = issued.len() + 1;
        loop {
            let candidate = self.format(ordinal);
            if !issued.iter().any(|code| code.as_str() == candidate) {
                return AgentCode(candidate);
            }
            ordinal += 1;
        }
    }
}
