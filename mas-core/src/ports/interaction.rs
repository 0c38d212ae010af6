//! Side-effect surfaces of the user interface.
//!
//! These are fire-and-forget (navigation, notices) or answered by the user (the
//! confirmation prompt). None of them can fail from the dashboard's point of view.

/// Routes the user to another view.
pub trait Navigator: Send + Sync {
    /// Navigate to the view addressed by `segments`, reloading it if it is already open
    fn navigate_to(&self, segments: Vec<String>);
}

/// Shows transient notices to the user.
pub trait Notifier: Send + Sync {
    /// Remove all currently displayed notices
    fn clear(&self);

    /// Show an informational (non-error) notice identified by a translation key
    fn info(&self, message_key: &str);
}

/// Asks the user a yes/no question before a destructive action.
pub trait ConfirmationPrompt: Send + Sync {
    /// Ask the question identified by `message_key`; resolves to `true` on "yes"
    fn confirm(&self, message_key: &str) -> impl Future<Output = bool> + Send;
}
