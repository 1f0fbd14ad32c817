//! Single filter criteria.

/// Reads one text field out of a record.
pub type FieldFn<T> = fn(&T) -> &str;

/// How a criterion compares its value against a field.
///
/// Text rules hold their operand already lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Case-insensitive substring containment.
    Contains(String),
    /// Case-insensitive exact equality.
    Equals(String),
    /// Inclusive lower bound, compared lexicographically.
    AtLeast(String),
    /// Inclusive upper bound, compared lexicographically.
    AtMost(String),
}

impl Rule {
    pub fn test(&self, value: &str) -> bool {
        match self {
            Rule::Contains(needle) => value.to_lowercase().contains(needle.as_str()),
            Rule::Equals(expected) => value.to_lowercase() == *expected,
            Rule::AtLeast(bound) => value >= bound.as_str(),
            Rule::AtMost(bound) => value <= bound.as_str(),
        }
    }
}

/// One user-selected constraint over one or more record fields.
///
/// An empty input produces an inactive criterion, which matches every record.
/// With several fields the criterion matches when any of them passes the rule.
pub struct Criterion<T> {
    name: &'static str,
    fields: Vec<FieldFn<T>>,
    rule: Option<Rule>,
}

impl<T> Criterion<T> {
    fn build(name: &'static str, fields: &[FieldFn<T>], input: &str, rule: fn(String) -> Rule) -> Self {
        let rule = if input.is_empty() { None } else { Some(rule(input.to_string())) };
        Self {
            name,
            fields: fields.to_vec(),
            rule,
        }
    }

    /// Free-text search: case-insensitive substring over any of `fields`.
    pub fn contains(name: &'static str, fields: &[FieldFn<T>], query: &str) -> Self {
        Self::build(name, fields, query, |q| Rule::Contains(q.to_lowercase()))
    }

    /// Status-style match: case-insensitive, whole value.
    pub fn equals(name: &'static str, field: FieldFn<T>, value: &str) -> Self {
        Self::build(name, &[field], value, |v| Rule::Equals(v.to_lowercase()))
    }

    /// Inclusive lower bound on a sortable text field (e.g. `YYYY-MM-DD`).
    pub fn at_least(name: &'static str, field: FieldFn<T>, bound: &str) -> Self {
        Self::build(name, &[field], bound, Rule::AtLeast)
    }

    /// Inclusive upper bound on a sortable text field.
    pub fn at_most(name: &'static str, field: FieldFn<T>, bound: &str) -> Self {
        Self::build(name, &[field], bound, Rule::AtMost)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.rule.is_some()
    }

    pub fn matches(&self, item: &T) -> bool {
        match &self.rule {
            None => true,
            Some(rule) => self.fields.iter().any(|field| rule.test(field(item))),
        }
    }
}

impl<T> Clone for Criterion<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            fields: self.fields.clone(),
            rule: self.rule.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Criterion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Criterion")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .field("rule", &self.rule)
            .finish()
    }
}
