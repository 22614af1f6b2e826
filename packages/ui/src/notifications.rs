//! Transient notifications for failed and completed actions.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, level: NoticeLevel, message: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Notice {
            id: self.next_id,
            level,
            message: message.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show a notice. On the web it disappears after a few seconds.
pub fn notify(notifications: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    if level == NoticeLevel::Error {
        tracing::warn!("{}", message);
    }
    let id = notifications.write().push(level, message);

    #[cfg(target_arch = "wasm32")]
    {
        let mut notifications = *notifications;
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
            notifications.write().dismiss(id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[component]
pub fn NotificationTray() -> Element {
    let mut notifications = use_notifications();
    let entries = notifications().entries.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notification-tray",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: match notice.level {
                        NoticeLevel::Error => "notice notice--error",
                        NoticeLevel::Success => "notice notice--success",
                        NoticeLevel::Info => "notice notice--info",
                    },
                    span { "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        title: "Dismiss",
                        onclick: move |_| notifications.write().dismiss(notice.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut n = Notifications::default();
        let first = n.push(NoticeLevel::Error, "Network error");
        let second = n.push(NoticeLevel::Success, "Copied");
        assert_ne!(first, second);

        n.dismiss(first);
        assert_eq!(n.entries.len(), 1);
        assert_eq!(n.entries[0].message, "Copied");

        n.dismiss(first);
        assert_eq!(n.entries.len(), 1);
    }
}
