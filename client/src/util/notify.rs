//! Show a notification banner and schedule its auto-dismissal.

use leptos::prelude::*;

use diagram::config::NOTIFICATION_TIMEOUT_MS;
use diagram::notify::{Notification, NotificationCenter};

use crate::util::timers;

/// Show `notification`, hiding it after [`NOTIFICATION_TIMEOUT_MS`] unless a
/// newer banner has replaced it by then.
pub fn show(center: RwSignal<NotificationCenter>, notification: Notification) {
    let Some(id) = center.try_update(|c| c.show(notification)) else {
        return;
    };
    timers::after(NOTIFICATION_TIMEOUT_MS, move || {
        center.update(|c| {
            c.dismiss(id);
        });
    });
}

pub fn success(center: RwSignal<NotificationCenter>, description: impl Into<String>) {
    show(center, Notification::success("Success").with_description(description));
}

pub fn warning(center: RwSignal<NotificationCenter>, title: impl Into<String>, description: impl Into<String>) {
    show(center, Notification::warning(title).with_description(description));
}

pub fn error(center: RwSignal<NotificationCenter>, description: impl Into<String>) {
    show(center, Notification::error("Error").with_description(description));
}
