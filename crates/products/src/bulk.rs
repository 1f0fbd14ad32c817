//! Row selection and bulk actions on the product table.

use std::collections::BTreeSet;

use thiserror::Error;

use agribase_core::ProductId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BulkActionError {
    #[error("Please select at least one product")]
    NothingSelected,

    #[error("Please select an action")]
    NoActionChosen,
}

/// Action picked in the bulk-action dropdown (its option value).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BulkAction(String);

impl BulkAction {
    /// `None` for the empty placeholder option.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BulkAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checked product rows.
///
/// The header checkbox state is derived from the rows on display, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelection {
    checked: BTreeSet<ProductId>,
}

impl BulkSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The header checkbox: checks or clears every row.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = ProductId>, checked: bool) {
        if checked {
            self.checked.extend(ids);
        } else {
            self.checked.clear();
        }
    }

    pub fn set(&mut self, id: ProductId, checked: bool) {
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }

    pub fn is_checked(&self, id: &ProductId) -> bool {
        self.checked.contains(id)
    }

    /// Header checkbox state: true when there is at least one row and every
    /// row is checked.
    pub fn all_checked<'a>(&self, rows: impl IntoIterator<Item = &'a ProductId>) -> bool {
        let mut any = false;
        for id in rows {
            if !self.checked.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Validate a bulk request. Selection is checked before the action.
    pub fn prepare(&self, action: Option<BulkAction>) -> Result<BulkRequest, BulkActionError> {
        if self.checked.is_empty() {
            return Err(BulkActionError::NothingSelected);
        }
        let action = action.ok_or(BulkActionError::NoActionChosen)?;
        Ok(BulkRequest {
            action,
            products: self.checked.iter().copied().collect(),
        })
    }
}

/// A bulk action that passed the guards and awaits confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRequest {
    pub action: BulkAction,
    pub products: Vec<ProductId>,
}

impl BulkRequest {
    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn confirm_prompt(&self) -> String {
        format!("Are you sure you want to {} {} products?", self.action, self.count())
    }

    pub fn applied_message(&self) -> String {
        format!("{} action applied to {} products", self.action, self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_checked_first() {
        let selection = BulkSelection::new();
        assert_eq!(selection.prepare(None), Err(BulkActionError::NothingSelected));
        assert_eq!(
            selection.prepare(BulkAction::parse("delete")),
            Err(BulkActionError::NothingSelected)
        );
    }

    #[test]
    fn missing_action_is_rejected() {
        let mut selection = BulkSelection::new();
        selection.set(ProductId::new(), true);
        assert_eq!(
            selection.prepare(BulkAction::parse("")),
            Err(BulkActionError::NoActionChosen)
        );
        assert_eq!(
            BulkActionError::NoActionChosen.to_string(),
            "Please select an action"
        );
    }

    #[test]
    fn select_all_then_prepare() {
        let ids: Vec<ProductId> = (0..3).map(|_| ProductId::new()).collect();
        let mut selection = BulkSelection::new();
        selection.select_all(ids.iter().copied(), true);
        assert!(selection.all_checked(&ids));

        let request = selection.prepare(BulkAction::parse("delete")).unwrap();
        assert_eq!(request.count(), 3);
        assert_eq!(request.confirm_prompt(), "Are you sure you want to delete 3 products?");
        assert_eq!(request.applied_message(), "delete action applied to 3 products");
    }

    #[test]
    fn unchecking_one_row_clears_header_state() {
        let ids: Vec<ProductId> = (0..2).map(|_| ProductId::new()).collect();
        let mut selection = BulkSelection::new();
        selection.select_all(ids.iter().copied(), true);
        selection.set(ids[0], false);
        assert!(!selection.all_checked(&ids));
        assert_eq!(selection.len(), 1);

        selection.select_all(ids.iter().copied(), false);
        assert!(selection.is_empty());
    }

    #[test]
    fn checking_the_last_row_restores_header_state() {
        let ids: Vec<ProductId> = (0..3).map(|_| ProductId::new()).collect();
        let mut selection = BulkSelection::new();
        for id in &ids[..2] {
            selection.set(*id, true);
            assert!(!selection.all_checked(&ids));
        }
        selection.set(ids[2], true);
        assert!(selection.all_checked(&ids));
    }

    #[test]
    fn no_rows_means_header_unchecked() {
        let rows: [ProductId; 0] = [];
        assert!(!BulkSelection::new().all_checked(&rows));
    }
}
