//! The running admin panel.

use agribase_agents::CountingSequence;
use agribase_auth::{AccessError, AdminSession, KeyValueStore, Navigation, Router};

use crate::pages::{AgentsPage, DashboardPage, OrdersPage, ProductsPage};
use crate::{Catalog, Dialogs, Layout, PanelConfig};

/// Panel state for one browser tab.
///
/// The login flag is read from the store once, in [`AdminApp::start`]. Pages
/// are opened from copies of the catalog, so changes made on a page are gone
/// the next time it is opened.
#[derive(Debug)]
pub struct AdminApp<S, D> {
    config: PanelConfig,
    router: Router,
    store: S,
    dialogs: D,
    session: AdminSession,
    layout: Layout,
    catalog: Catalog,
}

impl<S: KeyValueStore, D: Dialogs> AdminApp<S, D> {
    pub fn start(config: PanelConfig, store: S, dialogs: D, catalog: Catalog) -> Self {
        let session = AdminSession::restore(&store);
        tracing::info!(
            logged_in = session.is_logged_in(),
            products = catalog.products.len(),
            orders = catalog.orders.len(),
            agents = catalog.agents.len(),
            "admin panel started"
        );
        Self {
            router: config.router(),
            config,
            store,
            dialogs,
            session,
            layout: Layout::new(),
            catalog,
        }
    }

    /// Shut down and hand back the store, e.g. to start again with it.
    pub fn stop(self) -> S {
        self.store
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn sign_in(&mut self) {
        self.session.sign_in(&mut self.store);
    }

    pub fn logout(&mut self) -> Navigation {
        self.session.sign_out(&mut self.store);
        self.layout = Layout::new();
        self.router.after_logout()
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        self.router.enter(&self.session, path)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn dashboard(&self) -> Result<DashboardPage, AccessError> {
        DashboardPage::open(
            &self.session,
            &self.catalog.products,
            &self.catalog.orders,
            &self.catalog.agents,
        )
    }

    pub fn products(&self) -> Result<ProductsPage, AccessError> {
        ProductsPage::open(
            &self.session,
            self.catalog.products.clone(),
            &self.store,
            self.config.default_view_mode,
        )
    }

    pub fn orders(&self) -> Result<OrdersPage, AccessError> {
        OrdersPage::open(&self.session, self.catalog.orders.clone())
    }

    pub fn agents(&self) -> Result<AgentsPage<CountingSequence>, AccessError> {
        AgentsPage::open(
            &self.session,
            self.catalog.agents.clone(),
            self.config.code_sequence(),
        )
    }
}
