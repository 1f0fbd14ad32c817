use agribase_filter::{Criterion, FilterSet};

use crate::Order;

pub const ORDERS_NOUN: &str = "orders";

/// Inputs of the order filter bar. Dates are `YYYY-MM-DD`, both inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: String,
    pub date_from: String,
    pub date_to: String,
    pub search: String,
}

impl OrderFilter {
    pub fn criteria(&self) -> FilterSet<Order> {
        FilterSet::new()
            .with(Criterion::equals("status", Order::status_label, &self.status))
            .with(Criterion::at_least("date_from", Order::date_str, &self.date_from))
            .with(Criterion::at_most("date_to", Order::date_str, &self.date_to))
            .with(Criterion::contains(
                "search",
                &[Order::number, Order::customer],
                &self.search,
            ))
    }
}
