//! Outbound notification dispatch.
//!
//! The `Notifier` trait is the application's single interface to the notification
//! transport. Services receive a notifier as an explicit constructor dependency and
//! treat every dispatch as best-effort: delivery failures are logged by the caller
//! and never roll back persisted state.

use async_trait::async_trait;

use crate::{
    error::notify::NotifyError,
    model::{event::Event, invitation::Invitation, user::User},
};

/// Interface to the outbound notification transport.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announces a newly created event.
    async fn event_created(&self, event: &Event, owner: &User) -> Result<(), NotifyError>;

    /// Announces a newly issued invitation.
    async fn invitation_issued(
        &self,
        invitation: &Invitation,
        event: &Event,
        invitee: &User,
    ) -> Result<(), NotifyError>;

    /// Reminds attendees of an upcoming event.
    async fn event_reminder(&self, event: &Event, attendees: &[User]) -> Result<(), NotifyError>;
}

/// Notifier posting messages to a chat webhook.
///
/// Sends a JSON `content` payload to the configured webhook URL using the shared
/// HTTP client. Non-success responses are reported as `NotifyError::UnexpectedStatus`.
pub struct WebhookNotifier {
    http_client: reqwest::Client,
    webhook_url: String,
    app_url: String,
}

impl WebhookNotifier {
    /// Creates a new webhook notifier.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client for outbound requests
    /// - `webhook_url` - Webhook endpoint to post messages to
    /// - `app_url` - Application base URL used to build event links
    pub fn new(http_client: reqwest::Client, webhook_url: String, app_url: String) -> Self {
        Self {
            http_client,
            webhook_url,
            app_url,
        }
    }

    async fn post(&self, content: String) -> Result<(), NotifyError> {
        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::UnexpectedStatus(response.status().as_u16()));
        }

        Ok(())
    }

    fn event_link(&self, event: &Event) -> String {
        format!("{}/events/{}", self.app_url, event.id)
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn event_created(&self, event: &Event, owner: &User) -> Result<(), NotifyError> {
        let content = format!(
            "**{}** scheduled a new event **{}** for {}.\n{}",
            owner.name,
            event.name,
            event.start_at.format("%Y-%m-%d %H:%M UTC"),
            self.event_link(event),
        );

        self.post(content).await
    }

    async fn invitation_issued(
        &self,
        _invitation: &Invitation,
        event: &Event,
        invitee: &User,
    ) -> Result<(), NotifyError> {
        let content = format!(
            "**{}** has been invited to **{}** on {}.\n{}",
            invitee.name,
            event.name,
            event.start_at.format("%Y-%m-%d %H:%M UTC"),
            self.event_link(event),
        );

        self.post(content).await
    }

    async fn event_reminder(&self, event: &Event, attendees: &[User]) -> Result<(), NotifyError> {
        let names: Vec<&str> = attendees.iter().map(|user| user.name.as_str()).collect();

        let content = format!(
            "Reminder: **{}** starts at {}.\nAttending: {}\n{}",
            event.name,
            event.start_at.format("%Y-%m-%d %H:%M UTC"),
            if names.is_empty() {
                "nobody yet".to_string()
            } else {
                names.join(", ")
            },
            self.event_link(event),
        );

        self.post(content).await
    }
}

/// Notifier used when no webhook is configured.
///
/// Accepts every dispatch and only records it at debug level.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn event_created(&self, event: &Event, _owner: &User) -> Result<(), NotifyError> {
        tracing::debug!("Notifications disabled, skipping creation announcement for event {}", event.id);
        Ok(())
    }

    async fn invitation_issued(
        &self,
        invitation: &Invitation,
        _event: &Event,
        _invitee: &User,
    ) -> Result<(), NotifyError> {
        tracing::debug!("Notifications disabled, skipping announcement for invitation {}", invitation.id);
        Ok(())
    }

    async fn event_reminder(&self, event: &Event, _attendees: &[User]) -> Result<(), NotifyError> {
        tracing::debug!("Notifications disabled, skipping reminder for event {}", event.id);
        Ok(())
    }
}
