use serde::Serialize;

/// Admin pages the panel knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Login,
    Dashboard,
    Products,
    Orders,
    Agents,
    /// Any other admin page: gated, but without page behavior.
    Other,
}

impl Page {
    /// File name of the page template.
    pub fn file_name(&self, login_page: &str) -> Option<String> {
        let name = match self {
            Page::Login => return Some(login_page.to_string()),
            Page::Dashboard => "dashboard.html",
            Page::Products => "products.html",
            Page::Orders => "orders.html",
            Page::Agents => "agents.html",
            Page::Other => return None,
        };
        Some(name.to_string())
    }

    /// Recognize a page from its location path.
    pub fn from_path(path: &str, login_page: &str) -> Page {
        if path.contains(login_page) {
            Page::Login
        } else if path.contains("dashboard.html") {
            Page::Dashboard
        } else if path.contains("products.html") {
            Page::Products
        } else if path.contains("orders.html") {
            Page::Orders
        } else if path.contains("agents.html") {
            Page::Agents
        } else {
            Page::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_admin_pages() {
        assert_eq!(Page::from_path("/admin/index.html", "index.html"), Page::Login);
        assert_eq!(Page::from_path("/admin/dashboard.html", "index.html"), Page::Dashboard);
        assert_eq!(Page::from_path("/admin/products.html?x=1", "index.html"), Page::Products);
        assert_eq!(Page::from_path("/admin/orders.html", "index.html"), Page::Orders);
        assert_eq!(Page::from_path("/admin/agents.html", "index.html"), Page::Agents);
        assert_eq!(Page::from_path("/admin/settings.html", "index.html"), Page::Other);
    }

    #[test]
    fn login_page_name_is_configurable() {
        assert_eq!(Page::from_path("/admin/login.html", "login.html"), Page::Login);
        assert_eq!(Page::from_path("/admin/index.html", "login.html"), Page::Other);
        assert_eq!(Page::Login.file_name("login.html").as_deref(), Some("login.html"));
    }
}
