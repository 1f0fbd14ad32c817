//! Sidebar and header dropdowns shared by every admin page.

use serde::Serialize;

/// Where a click landed, as far as the chrome cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    SidebarToggle,
    NotificationToggle,
    NotificationMenu,
    UserToggle,
    UserMenu,
    Elsewhere,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Open/closed state of the page chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    sidebar_active: bool,
    notifications: Dropdown,
    user_menu: Dropdown,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click anywhere on the page.
    ///
    /// A dropdown closes on any click outside both its trigger and its menu.
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::SidebarToggle => self.sidebar_active = !self.sidebar_active,
            ClickTarget::NotificationToggle => self.notifications.toggle(),
            ClickTarget::UserToggle => self.user_menu.toggle(),
            ClickTarget::NotificationMenu | ClickTarget::UserMenu | ClickTarget::Elsewhere => {}
        }

        if !matches!(target, ClickTarget::NotificationToggle | ClickTarget::NotificationMenu) {
            self.notifications.close();
        }
        if !matches!(target, ClickTarget::UserToggle | ClickTarget::UserMenu) {
            self.user_menu.close();
        }
    }

    /// The sidebar and its toggle button share one `active` state.
    pub fn sidebar_active(&self) -> bool {
        self.sidebar_active
    }

    pub fn notifications(&self) -> Dropdown {
        self.notifications
    }

    pub fn user_menu(&self) -> Dropdown {
        self.user_menu
    }
}
