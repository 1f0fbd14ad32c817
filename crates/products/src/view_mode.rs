use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use agribase_core::KeyValueStore;

/// Store key holding the saved product view preference.
pub const VIEW_MODE_KEY: &str = "productViewMode";

/// How the product list is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown view mode '{0}' (expected 'table' or 'grid')")]
pub struct ViewModeParseError(pub String);

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Grid => "grid",
        }
    }

    /// Saved preference, if any and if recognizable.
    pub fn load(store: &impl KeyValueStore) -> Option<ViewMode> {
        let raw = store.get(VIEW_MODE_KEY)?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::warn!(%err, "ignoring saved product view mode");
                None
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set(VIEW_MODE_KEY, self.as_str());
    }

    pub fn shows_table(&self) -> bool {
        *self == ViewMode::Table
    }

    pub fn shows_grid(&self) -> bool {
        *self == ViewMode::Grid
    }
}

impl FromStr for ViewMode {
    type Err = ViewModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(ViewMode::Table),
            "grid" => Ok(ViewMode::Grid),
            other => Err(ViewModeParseError(other.to_string())),
        }
    }
}

impl core::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agribase_core::InMemoryStore;

    #[test]
    fn absent_preference_loads_nothing() {
        assert_eq!(ViewMode::load(&InMemoryStore::new()), None);
        assert_eq!(ViewMode::default(), ViewMode::Table);
    }

    #[test]
    fn save_then_load() {
        let mut store = InMemoryStore::new();
        ViewMode::Grid.save(&mut store);
        assert_eq!(store.get(VIEW_MODE_KEY).as_deref(), Some("grid"));
        assert_eq!(ViewMode::load(&store), Some(ViewMode::Grid));
    }

    #[test]
    fn unknown_saved_value_is_ignored() {
        let store: InMemoryStore = [(VIEW_MODE_KEY, "carousel")].into_iter().collect();
        assert_eq!(ViewMode::load(&store), None);
    }

    #[test]
    fn exactly_one_view_is_shown() {
        for mode in [ViewMode::Table, ViewMode::Grid] {
            assert_ne!(mode.shows_table(), mode.shows_grid());
        }
    }
}
