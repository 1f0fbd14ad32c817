use chrono::Utc;
use serde::Serialize;

use agribase_auth::{AccessError, AdminSession};
use agribase_core::{Aggregate, DomainError, DomainResult, StatusBadge};
use agribase_filter::{Listing, ResultsSummary};
use agribase_orders::{
    ChangeStatus, Order, OrderCommand, OrderEvent, OrderFilter, OrderStatus, OrderStatusChanged,
    ORDERS_NOUN,
};

use crate::Dialogs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRowView {
    pub number: String,
    pub customer: String,
    pub date: String,
    pub badge: StatusBadge,
    /// Value selected in the row's status dropdown.
    pub status_value: &'static str,
    pub hidden: bool,
}

/// Contents of the order details view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetails {
    pub number: String,
    pub customer: String,
    pub date: String,
    pub status: &'static str,
    pub total: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OrdersPage {
    listing: Listing<Order>,
    filter: OrderFilter,
}

impl OrdersPage {
    pub fn open(session: &AdminSession, orders: Vec<Order>) -> Result<Self, AccessError> {
        session.require_logged_in()?;
        Ok(Self {
            listing: Listing::new(orders),
            filter: OrderFilter::default(),
        })
    }

    pub fn filter_mut(&mut self) -> &mut OrderFilter {
        &mut self.filter
    }

    pub fn apply_filters(&mut self) -> ResultsSummary {
        self.listing.apply(&self.filter.criteria(), ORDERS_NOUN)
    }

    pub fn summary(&self) -> Option<ResultsSummary> {
        self.listing.summary()
    }

    pub fn listing(&self) -> &Listing<Order> {
        &self.listing
    }

    /// The status dropdown of row `number` changed to `status`.
    ///
    /// Returns `None` when the order already had that status. Visibility is
    /// left alone until filters are applied again.
    pub fn change_status(
        &mut self,
        number: &str,
        status: OrderStatus,
        dialogs: &mut impl Dialogs,
    ) -> DomainResult<Option<OrderStatusChanged>> {
        let index = self.index_of(number)?;
        let order = self
            .listing
            .record_mut(index)
            .ok_or_else(|| DomainError::not_found(format!("order #{number}")))?;

        let command = OrderCommand::ChangeStatus(ChangeStatus {
            status,
            occurred_at: Utc::now(),
        });
        let events = order.execute(&command)?;

        let Some(OrderEvent::StatusChanged(changed)) = events.into_iter().next() else {
            return Ok(None);
        };
        tracing::info!(
            order = %changed.order_number,
            from = changed.from.as_str(),
            to = changed.to.as_str(),
            "order status changed"
        );
        dialogs.alert(&changed.message());
        Ok(Some(changed))
    }

    pub fn order_details(&self, number: &str) -> DomainResult<OrderDetails> {
        let order = &self.listing.records()[self.index_of(number)?];
        Ok(OrderDetails {
            number: order.number().to_string(),
            customer: order.customer().to_string(),
            date: order.date_str().to_string(),
            status: order.status().label(),
            total: order.total(),
        })
    }

    pub fn rows(&self) -> Vec<OrderRowView> {
        self.listing
            .rows()
            .map(|(order, visible)| OrderRowView {
                number: order.number().to_string(),
                customer: order.customer().to_string(),
                date: order.date_str().to_string(),
                badge: order.status().badge(),
                status_value: order.status().as_str(),
                hidden: !visible,
            })
            .collect()
    }

    fn index_of(&self, number: &str) -> DomainResult<usize> {
        self.listing
            .position(|o| o.number() == number)
            .ok_or_else(|| DomainError::not_found(format!("order #{number}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agribase_auth::InMemoryStore;
    use agribase_orders::OrderDate;

    use crate::ScriptedDialogs;

    fn order(number: &str, customer: &str, date: &str, status: OrderStatus) -> Order {
        Order::new(number, customer, OrderDate::parse(date).unwrap(), status)
    }

    fn page() -> OrdersPage {
        let mut store = InMemoryStore::new();
        let mut session = AdminSession::logged_out();
        session.sign_in(&mut store);
        OrdersPage::open(
            &session,
            vec![
                order("1001", "Kofi Mensah", "2024-01-05", OrderStatus::Pending),
                order("1002", "Ama Owusu", "2024-01-10", OrderStatus::Completed),
                order("1003", "Kwame Asante", "2024-01-15", OrderStatus::Processing),
            ],
        )
        .unwrap()
    }

    #[test]
    fn status_change_updates_badge_and_alerts() {
        let mut page = page();
        let mut dialogs = ScriptedDialogs::confirming();

        let changed = page
            .change_status("1001", OrderStatus::Completed, &mut dialogs)
            .unwrap()
            .unwrap();
        assert_eq!(changed.from, OrderStatus::Pending);
        assert_eq!(dialogs.last_alert(), Some("Order #1001 status updated to Completed"));

        let row = &page.rows()[0];
        assert_eq!(row.badge.label, "Completed");
        assert!(row.badge.has_class("status-completed"));
        assert_eq!(row.status_value, "completed");
    }

    #[test]
    fn same_status_is_silent() {
        let mut page = page();
        let mut dialogs = ScriptedDialogs::confirming();
        assert_eq!(page.change_status("1002", OrderStatus::Completed, &mut dialogs), Ok(None));
        assert!(dialogs.alerts().is_empty());
    }

    #[test]
    fn unknown_order_is_not_found() {
        let mut page = page();
        let mut dialogs = ScriptedDialogs::confirming();
        assert!(matches!(
            page.change_status("9999", OrderStatus::Completed, &mut dialogs),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(page.order_details("9999"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn status_change_does_not_refilter() {
        let mut page = page();
        let mut dialogs = ScriptedDialogs::confirming();
        page.filter_mut().status = "pending".into();
        assert_eq!(page.apply_filters().visible, 1);

        page.change_status("1001", OrderStatus::Cancelled, &mut dialogs).unwrap();
        assert!(!page.rows()[0].hidden);

        assert_eq!(page.apply_filters().visible, 0);
        assert!(page.rows()[0].hidden);
    }

    #[test]
    fn date_range_is_inclusive() {
        let mut page = page();
        page.filter_mut().date_from = "2024-01-10".into();
        page.filter_mut().date_to = "2024-01-15".into();
        let summary = page.apply_filters();
        assert_eq!(summary.to_string(), "Showing 2 of 3 orders");
        let hidden: Vec<bool> = page.rows().iter().map(|r| r.hidden).collect();
        assert_eq!(hidden, vec![true, false, false]);
    }

    #[test]
    fn details_report_current_status() {
        let page = page();
        let details = page.order_details("1003").unwrap();
        assert_eq!(details.customer, "Kwame Asante");
        assert_eq!(details.status, "Processing");
        assert_eq!(details.total, None);
    }
}
