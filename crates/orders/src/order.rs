use core::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use agribase_core::{Aggregate, AggregateRoot, DomainError, Event, StatusBadge};

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown order status '{0}'")]
pub struct StatusParseError(pub String);

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Option value used by the status select and filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        self.badge().label
    }

    pub fn badge(&self) -> StatusBadge {
        match self {
            OrderStatus::Pending => StatusBadge::new("Pending", "status-pending"),
            OrderStatus::Processing => StatusBadge::new("Processing", "status-processing"),
            OrderStatus::Completed => StatusBadge::new("Completed", "status-completed"),
            OrderStatus::Cancelled => StatusBadge::new("Cancelled", "status-cancelled"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Order date in canonical `YYYY-MM-DD` form, so text order is date order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderDate(String);

impl OrderDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let date = NaiveDate::parse_from_str(raw.trim(), Self::FORMAT)
            .map_err(|e| DomainError::validation(format!("order date '{raw}': {e}")))?;
        Ok(Self::from(date))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for OrderDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(Self::FORMAT).to_string())
    }
}

impl TryFrom<String> for OrderDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrderDate> for String {
    fn from(value: OrderDate) -> Self {
        value.0
    }
}

impl core::fmt::Display for OrderDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An order row in the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    number: String,
    customer: String,
    date: OrderDate,
    status: OrderStatus,
    /// Order total in the smallest currency unit, when known.
    #[serde(default)]
    total: Option<u64>,
    #[serde(skip)]
    version: u64,
}

impl Order {
    pub fn new(
        number: impl Into<String>,
        customer: impl Into<String>,
        date: OrderDate,
        status: OrderStatus,
    ) -> Self {
        Self {
            number: number.into(),
            customer: customer.into(),
            date,
            status,
            total: None,
            version: 0,
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn date(&self) -> &OrderDate {
        &self.date
    }

    pub fn date_str(&self) -> &str {
        self.date.as_str()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn status_label(&self) -> &str {
        self.status.label()
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }
}

impl AggregateRoot for Order {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.number
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: ChangeStatus (the row's status select changed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatus {
    pub status: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCommand {
    ChangeStatus(ChangeStatus),
}

/// Event: OrderStatusChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusChanged {
    pub order_number: String,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

impl OrderStatusChanged {
    pub fn message(&self) -> String {
        format!("Order #{} status updated to {}", self.order_number, self.to.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    StatusChanged(OrderStatusChanged),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::StatusChanged(_) => "orders.order.status_changed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::StatusChanged(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::StatusChanged(e) => {
                self.status = e.to;
            }
        }
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::ChangeStatus(cmd) => Ok(self.handle_change_status(cmd)),
        }
    }
}

impl Order {
    /// Any status may follow any other; re-selecting the current one is a no-op.
    fn handle_change_status(&self, cmd: &ChangeStatus) -> Vec<OrderEvent> {
        if cmd.status == self.status {
            return Vec::new();
        }
        vec![OrderEvent::StatusChanged(OrderStatusChanged {
            order_number: self.number.clone(),
            from: self.status,
            to: cmd.status,
            occurred_at: cmd.occurred_at,
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> OrderDate {
        OrderDate::parse(raw).unwrap()
    }

    fn pending_order() -> Order {
        Order::new("ORD-1001", "Kofi Mensah", date("2024-03-10"), OrderStatus::Pending)
    }

    fn change(status: OrderStatus) -> OrderCommand {
        OrderCommand::ChangeStatus(ChangeStatus {
            status,
            occurred_at: Utc::now(),
        })
    }

    #[test]
    fn change_status_emits_event_with_message() {
        let order = pending_order();
        let events = order.handle(&change(OrderStatus::Processing)).unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            OrderEvent::StatusChanged(e) => {
                assert_eq!(e.from, OrderStatus::Pending);
                assert_eq!(e.to, OrderStatus::Processing);
                assert_eq!(e.message(), "Order #ORD-1001 status updated to Processing");
            }
        }
        assert_eq!(events[0].event_type(), "orders.order.status_changed");
    }

    #[test]
    fn execute_updates_status_badge_and_version() {
        let mut order = pending_order();
        order.execute(&change(OrderStatus::Cancelled)).unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert_eq!(order.version(), 1);

        let badge = order.status().badge();
        assert_eq!(badge.label, "Cancelled");
        assert!(badge.has_class("status-cancelled"));
        for other in ["status-pending", "status-processing", "status-completed"] {
            assert!(!badge.has_class(other));
        }
    }

    #[test]
    fn reselecting_current_status_is_noop() {
        let mut order = pending_order();
        let events = order.execute(&change(OrderStatus::Pending)).unwrap();
        assert!(events.is_empty());
        assert_eq!(order.version(), 0);
    }

    #[test]
    fn completed_orders_can_be_reopened() {
        let mut order = pending_order();
        order.execute(&change(OrderStatus::Completed)).unwrap();
        order.execute(&change(OrderStatus::Processing)).unwrap();
        assert_eq!(order.status(), OrderStatus::Processing);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Completed".parse(), Ok(OrderStatus::Completed));
        assert_eq!("CANCELLED".parse(), Ok(OrderStatus::Cancelled));
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn order_date_is_canonical() {
        assert_eq!(OrderDate::from(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).as_str(), "2024-03-01");
        assert!(OrderDate::parse("03/10/2024").is_err());
        assert!(OrderDate::parse("2024-02-30").is_err());
        assert!(date("2023-12-31") < date("2024-01-01"));
    }

    #[test]
    fn deserializes_and_validates_date() {
        let order: Order = serde_json::from_str(
            r#"{"number":"ORD-7","customer":"Amina","date":"2024-05-01","status":"completed"}"#,
        )
        .unwrap();
        assert_eq!(order.status(), OrderStatus::Completed);
        assert_eq!(order.total(), None);

        let bad = serde_json::from_str::<Order>(
            r#"{"number":"ORD-8","customer":"Amina","date":"May 1","status":"completed"}"#,
        );
        assert!(bad.is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: text order of canonical dates is calendar order.
            #[test]
            fn text_order_is_date_order(a in 0i64..40_000, b in 0i64..40_000) {
                let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
                let da = epoch + chrono::Duration::days(a);
                let db = epoch + chrono::Duration::days(b);
                let (ta, tb) = (OrderDate::from(da), OrderDate::from(db));
                prop_assert_eq!(ta.as_str().cmp(tb.as_str()), da.cmp(&db));
            }
        }
    }
}
