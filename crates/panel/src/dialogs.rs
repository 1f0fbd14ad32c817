//! Alert/confirm dialogs: the panel's only "backend".

use std::collections::VecDeque;

/// User-facing dialogs raised by page actions.
pub trait Dialogs {
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question; `true` means the admin confirmed.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<D> Dialogs for &mut D
where
    D: Dialogs + ?Sized,
{
    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Records every dialog and answers confirms from a script.
///
/// Once the scripted answers run out, `default_answer` is used.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs {
    alerts: Vec<String>,
    prompts: Vec<String>,
    answers: VecDeque<bool>,
    default_answer: bool,
}

impl ScriptedDialogs {
    pub fn confirming() -> Self {
        Self {
            default_answer: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(self.default_answer)
    }
}

/// Writes dialogs to the log and answers every confirm the same way.
#[derive(Debug, Clone, Copy)]
pub struct LoggingDialogs {
    auto_confirm: bool,
}

impl LoggingDialogs {
    pub fn new(auto_confirm: bool) -> Self {
        Self { auto_confirm }
    }
}

impl Dialogs for LoggingDialogs {
    fn alert(&mut self, message: &str) {
        tracing::info!(text = message, "alert");
    }

    fn confirm(&mut self, message: &str) -> bool {
        tracing::info!(text = message, answer = self.auto_confirm, "confirm");
        self.auto_confirm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_answers_then_default() {
        let mut dialogs = ScriptedDialogs::answering([false]);
        assert!(!dialogs.confirm("first?"));
        assert!(!dialogs.confirm("second?"));
        assert_eq!(dialogs.prompts(), ["first?", "second?"]);

        let mut dialogs = ScriptedDialogs::confirming();
        assert!(dialogs.confirm("ok?"));
    }

    #[test]
    fn alerts_are_recorded_in_order() {
        let mut dialogs = ScriptedDialogs::declining();
        dialogs.alert("one");
        dialogs.alert("two");
        assert_eq!(dialogs.alerts(), ["one", "two"]);
        assert_eq!(dialogs.last_alert(), Some("two"));
    }
}
