use crate::{FilterSet, ResultsSummary};

/// Records of one admin list together with their current visibility.
///
/// Filtering never touches the records themselves; rendering reads
/// [`Listing::rows`] and hides what is flagged invisible.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    records: Vec<T>,
    visible: Vec<bool>,
    summary: Option<ResultsSummary>,
}

impl<T> Listing<T> {
    pub fn new(records: Vec<T>) -> Self {
        let visible = vec![true; records.len()];
        Self {
            records,
            visible,
            summary: None,
        }
    }

    /// Apply `filters` and remember the resulting count line.
    pub fn apply(&mut self, filters: &FilterSet<T>, noun: &'static str) -> ResultsSummary {
        let outcome = filters.apply(&self.records);
        let summary = outcome.summary(noun);
        self.visible = outcome.visible;
        self.summary = Some(summary);

        tracing::debug!(
            noun,
            visible = summary.visible,
            total = summary.total,
            active = ?filters.active_criteria(),
            "filters applied"
        );

        summary
    }

    /// Show every record again and drop the count line.
    pub fn reset(&mut self) {
        self.visible = vec![true; self.records.len()];
        self.summary = None;
    }

    pub fn summary(&self) -> Option<ResultsSummary> {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn record_mut(&mut self, index: usize) -> Option<&mut T> {
        self.records.get_mut(index)
    }

    pub fn position(&self, pred: impl Fn(&T) -> bool) -> Option<usize> {
        self.records.iter().position(pred)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Every record in display order with its visibility flag.
    pub fn rows(&self) -> impl Iterator<Item = (&T, bool)> + '_ {
        self.records.iter().zip(self.visible.iter().copied())
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows().filter_map(|(record, visible)| visible.then_some(record))
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
