use crate::{Criterion, ResultsSummary};

/// Conjunction of criteria: a record passes when every active criterion holds.
pub struct FilterSet<T> {
    criteria: Vec<Criterion<T>>,
}

/// Per-record visibility after applying a [`FilterSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

impl<T> FilterSet<T> {
    pub fn new() -> Self {
        Self { criteria: Vec::new() }
    }

    pub fn with(mut self, criterion: Criterion<T>) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn push(&mut self, criterion: Criterion<T>) {
        self.criteria.push(criterion);
    }

    pub fn criteria(&self) -> &[Criterion<T>] {
        &self.criteria
    }

    /// Names of the criteria that actually constrain the result.
    pub fn active_criteria(&self) -> Vec<&'static str> {
        self.criteria
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.name())
            .collect()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.criteria.iter().all(|c| !c.is_active())
    }

    pub fn matches(&self, item: &T) -> bool {
        self.criteria.iter().all(|c| c.matches(item))
    }

    pub fn apply(&self, items: &[T]) -> FilterOutcome {
        let visible: Vec<bool> = items.iter().map(|item| self.matches(item)).collect();
        let visible_count = visible.iter().filter(|v| **v).count();
        FilterOutcome {
            visible,
            visible_count,
        }
    }
}

impl<T> Default for FilterSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FilterSet<T> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
        }
    }
}

impl<T> core::fmt::Debug for FilterSet<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.criteria.iter()).finish()
    }
}

impl FilterOutcome {
    pub fn total(&self) -> usize {
        self.visible.len()
    }

    pub fn summary(&self, noun: &'static str) -> ResultsSummary {
        ResultsSummary::new(self.visible_count, self.total(), noun)
    }
}
