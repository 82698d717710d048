use log::info;

/// A user-facing notification: a short title plus supporting text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub subtitle: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Fallback sink that routes notifications into the log output.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        info!("{}: {}", notification.title, notification.subtitle);
    }
}
