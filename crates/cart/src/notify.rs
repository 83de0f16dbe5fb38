//! Fire-and-forget user-facing failure notifications.

/// Displays a human-readable failure message to the user.
///
/// One-way: nothing is returned and delivery is not confirmed. The cart
/// store calls this exactly once per failed operation.
pub trait Notifier: Send + Sync {
    /// Show an error message.
    fn error(&self, message: &str);
}

/// Notifier that emits messages through `tracing`.
///
/// Suitable when the embedding application renders log output to the user
/// or no dedicated display surface exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
