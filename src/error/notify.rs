use thiserror::Error;

/// Failure to deliver an outbound notification.
///
/// Notification dispatch is best-effort: callers log these errors instead of
/// propagating them, so a failed delivery never rolls back persisted state.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The webhook request failed in transit.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The webhook endpoint answered with a non-success status.
    #[error("Webhook request failed with status {0}")]
    UnexpectedStatus(u16),
}
