use serde::Serialize;

use crate::{AdminSession, Page};

/// Where the browser ends up after the login check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Navigation {
    Show { page: Page },
    Redirect { to: String },
}

/// Resolves paths to pages and applies the login gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    login_page: String,
}

impl Router {
    pub fn new(login_page: impl Into<String>) -> Self {
        Self {
            login_page: login_page.into(),
        }
    }

    pub fn login_page(&self) -> &str {
        &self.login_page
    }

    pub fn resolve(&self, path: &str) -> Page {
        Page::from_path(path, &self.login_page)
    }

    /// Logged-out visitors are sent to the login page from everywhere else.
    pub fn enter(&self, session: &AdminSession, path: &str) -> Navigation {
        let page = self.resolve(path);
        if page != Page::Login && !session.is_logged_in() {
            tracing::info!(path, to = %self.login_page, "not logged in; redirecting");
            return Navigation::Redirect {
                to: self.login_page.clone(),
            };
        }
        Navigation::Show { page }
    }

    /// Where logout lands.
    pub fn after_logout(&self) -> Navigation {
        Navigation::Redirect {
            to: self.login_page.clone(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("index.html")
    }
}
