//! Page controllers.
//!
//! A page is opened with the running [`AdminSession`](agribase_auth::AdminSession)
//! and a fresh copy of its records; state lives only as long as the page.

pub mod agents;
pub mod dashboard;
pub mod orders;
pub mod products;

pub use agents::{AgentRowView, AgentsPage};
pub use dashboard::{ChartSlot, DashboardPage, DashboardSummary};
pub use orders::{OrderDetails, OrderRowView, OrdersPage};
pub use products::{ProductCardView, ProductRowView, ProductsPage};
