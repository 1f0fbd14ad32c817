//! Orders domain module.
//!
//! Order records, their status lifecycle and the order list filter.

pub mod filter;
pub mod order;

pub use filter::{OrderFilter, ORDERS_NOUN};
pub use order::{
    ChangeStatus, Order, OrderCommand, OrderDate, OrderEvent, OrderStatus, OrderStatusChanged,
    StatusParseError,
};
