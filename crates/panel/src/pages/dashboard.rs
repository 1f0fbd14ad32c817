use serde::Serialize;

use agribase_auth::{AccessError, AdminSession};
use agribase_agents::Agent;
use agribase_orders::{Order, OrderStatus};
use agribase_products::Product;

/// Element ids of the dashboard chart containers.
pub const CHART_SLOTS: [&str; 3] = ["sales-chart", "products-chart", "orders-chart"];

/// A chart container. No chart is drawn; the slot only records that the
/// container exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSlot {
    pub element_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub orders_by_status: Vec<(OrderStatus, usize)>,
    pub pending_agents: usize,
}

impl DashboardSummary {
    pub fn orders_with(&self, status: OrderStatus) -> usize {
        self.orders_by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPage {
    summary: DashboardSummary,
    charts: Vec<ChartSlot>,
}

impl DashboardPage {
    pub fn open(
        session: &AdminSession,
        products: &[Product],
        orders: &[Order],
        agents: &[Agent],
    ) -> Result<Self, AccessError> {
        session.require_logged_in()?;

        let orders_by_status = OrderStatus::ALL
            .iter()
            .map(|status| (*status, orders.iter().filter(|o| o.status() == *status).count()))
            .collect();
        let summary = DashboardSummary {
            total_products: products.len(),
            orders_by_status,
            pending_agents: agents.iter().filter(|a| a.is_reviewable()).count(),
        };

        let charts = CHART_SLOTS
            .iter()
            .map(|&element_id| {
                tracing::debug!(element_id, "chart placeholder");
                ChartSlot { element_id }
            })
            .collect();

        Ok(Self { summary, charts })
    }

    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }

    pub fn charts(&self) -> &[ChartSlot] {
        &self.charts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agribase_auth::InMemoryStore;
    use agribase_orders::OrderDate;
    use agribase_products::PriceRange;

    #[test]
    fn counts_records_per_status() {
        let mut store = InMemoryStore::new();
        let mut session = AdminSession::logged_out();
        session.sign_in(&mut store);

        let date = OrderDate::parse("2024-02-01").unwrap();
        let orders = vec![
            Order::new("1", "A", date.clone(), OrderStatus::Pending),
            Order::new("2", "B", date.clone(), OrderStatus::Pending),
            Order::new("3", "C", date, OrderStatus::Cancelled),
        ];
        let products = vec![Product::new("Hoe", "Equipment", PriceRange::new(500, 800))];
        let agents = vec![Agent::applicant("Yaw", "yaw@agri.example", "020")];

        let page = DashboardPage::open(&session, &products, &orders, &agents).unwrap();
        let summary = page.summary();
        assert_eq!(summary.total_products, 1);
        assert_eq!(summary.orders_with(OrderStatus::Pending), 2);
        assert_eq!(summary.orders_with(OrderStatus::Completed), 0);
        assert_eq!(summary.pending_agents, 1);
        assert_eq!(page.charts().len(), 3);
        assert_eq!(page.charts()[0].element_id, "sales-chart");
    }

    #[test]
    fn requires_login() {
        let session = AdminSession::logged_out();
        assert!(DashboardPage::open(&session, &[], &[], &[]).is_err());
    }
}
