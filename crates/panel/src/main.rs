use agribase_auth::{InMemoryStore, Navigation};
use agribase_orders::OrderStatus;
use agribase_panel::{AdminApp, Catalog, LoggingDialogs, PanelConfig};

fn main() -> anyhow::Result<()> {
    agribase_observability::init();

    let config = PanelConfig::from_env();
    let catalog = match &config.fixtures {
        Some(path) => Catalog::load(path)?,
        None => Catalog::demo()?,
    };

    let mut app = AdminApp::start(config, InMemoryStore::new(), LoggingDialogs::new(true), catalog);

    if let Navigation::Redirect { to } = app.navigate("/admin/dashboard.html") {
        tracing::info!(%to, "dashboard is gated; signing in");
        app.sign_in();
    }

    let dashboard = app.dashboard()?;
    let summary = dashboard.summary();
    tracing::info!(
        total_products = summary.total_products,
        pending_orders = summary.orders_with(OrderStatus::Pending),
        pending_agents = summary.pending_agents,
        "dashboard"
    );

    let mut products = app.products()?;
    products.filter_mut().category = "seed".to_string();
    let shown = products.apply_filters();
    tracing::info!(%shown, view_mode = %products.view_mode(), "products");

    let mut orders = app.orders()?;
    orders.filter_mut().status = OrderStatus::Pending.as_str().to_string();
    let shown = orders.apply_filters();
    tracing::info!(%shown, "orders");

    let mut agents = app.agents()?;
    let pending = agents
        .rows()
        .into_iter()
        .find(|row| row.approve_visible)
        .map(|row| row.id);
    if let Some(id) = pending {
        agents.approve(id, app.dialogs_mut())?;
    }
    agents.filter_mut().status = "approved".to_string();
    let shown = agents.apply_filters();
    tracing::info!(%shown, "agents");

    let store = app.stop();
    tracing::info!(stored_keys = store.len(), "admin panel stopped");
    Ok(())
}
