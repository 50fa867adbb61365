//! Transient notification banners.
//!
//! At most one banner is visible. Showing a new one replaces the old, and
//! each banner carries an id so the auto-dismiss timer started for it can
//! tell whether it is still the one on screen.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use uuid::Uuid;

/// Visual style of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
    Success,
    Warning,
}

impl Variant {
    /// CSS modifier class suffix.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub variant: Variant,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn new(variant: Variant, title: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), variant, title: title.into(), description: None }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Variant::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Variant::Destructive, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Variant::Warning, title)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Holds the banner currently on screen.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notification`, replacing any visible banner. Returns its id for
    /// the caller's dismiss timer.
    pub fn show(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.current = Some(notification);
        id
    }

    /// Hide the banner only if `id` is still the one showing.
    /// Returns whether anything was hidden.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Hide whatever is showing.
    pub fn hide(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
