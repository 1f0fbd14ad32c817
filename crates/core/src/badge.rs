use serde::Serialize;

use crate::ValueObject;

/// Rendered form of a status: the badge text plus its single visual class.
///
/// Status enums map to a badge in one function, so the text and class can
/// never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub css_class: &'static str,
}

impl StatusBadge {
    pub const fn new(label: &'static str, css_class: &'static str) -> Self {
        Self { label, css_class }
    }

    /// Full class list as it would appear on the element.
    pub fn classes(&self) -> [&'static str; 2] {
        ["status-badge", self.css_class]
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }
}

impl ValueObject for StatusBadge {}

impl core::fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label)
    }
}
