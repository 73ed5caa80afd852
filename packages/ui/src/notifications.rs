use dioxus::prelude::*;

use crate::sleep_secs;

/// How long a toast stays on screen.
const NOTICE_SECS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Transient toasts shown by the [`crate::Toaster`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show a toast and drop it after a few seconds.
pub fn notify(notifications: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Error => tracing::warn!("{message}"),
        _ => tracing::info!("{message}"),
    }

    let id = notifications.write().push(level, message);
    let mut notifications = *notifications;
    spawn(async move {
        sleep_secs(NOTICE_SECS).await;
        notifications.write().dismiss(id);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut n = Notifications::default();
        let a = n.push(NoticeLevel::Success, "Refeição cadastrada com sucesso");
        let b = n.push(NoticeLevel::Error, "Erro ao excluir refeição");
        assert!(b > a);
        assert_eq!(n.entries.len(), 2);
        assert_eq!(n.entries[1].level, NoticeLevel::Error);
    }

    #[test]
    fn test_dismiss_removes_only_that_notice() {
        let mut n = Notifications::default();
        let a = n.push(NoticeLevel::Info, "a");
        let b = n.push(NoticeLevel::Info, "b");
        n.dismiss(a);
        assert_eq!(n.entries.len(), 1);
        assert_eq!(n.entries[0].id, b);

        // Dismissing twice is harmless
        n.dismiss(a);
        assert_eq!(n.entries.len(), 1);
    }
}
