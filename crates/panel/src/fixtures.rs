//! Seed records for the panel.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use agribase_agents::Agent;
use agribase_orders::Order;
use agribase_products::Product;

const DEMO: &str = include_str!("../fixtures/demo.json");

/// Every record the panel pages are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub agents: Vec<Agent>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing catalog JSON")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("loading catalog {}", path.display()))
    }

    /// The catalog bundled with the binary.
    pub fn demo() -> anyhow::Result<Self> {
        Self::from_json(DEMO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agribase_agents::AgentStatus;
    use agribase_orders::OrderStatus;

    #[test]
    fn demo_catalog_parses() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.products.len(), 4);
        assert_eq!(catalog.orders[3].status(), OrderStatus::Cancelled);
        assert_eq!(catalog.orders[0].total(), Some(4500));
        assert_eq!(catalog.agents[0].code().map(|c| c.as_str()), Some("AG001"));
        assert_eq!(catalog.agents[1].status(), AgentStatus::Pending);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = Catalog::from_json(r#"{ "orders": [] }"#).unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn bad_date_is_rejected() {
        let raw = r#"{ "orders": [{ "number": "1", "customer": "A", "date": "05/01/2024", "status": "pending" }] }"#;
        assert!(Catalog::from_json(raw).is_err());
    }
}
