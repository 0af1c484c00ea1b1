use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::{event::EventRepository, invitation::InvitationRepository, user::UserRepository},
    error::AppError,
    service::notify::Notifier,
};

/// Starts the event reminder scheduler
///
/// This scheduler runs every minute and dispatches reminder notifications for
/// events whose start time falls inside the configured lead window and whose
/// reminder has not been sent yet.
///
/// # Arguments
/// - `db`: Database connection
/// - `notifier`: Notifier for outbound announcements
/// - `lead_minutes`: How many minutes before the start time reminders are sent
pub async fn start_scheduler(
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    lead_minutes: i64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_notifier = notifier.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let notifier = job_notifier.clone();

        Box::pin(async move {
            if let Err(e) = process_event_reminders(&db, notifier, lead_minutes).await {
                tracing::error!("Error processing event reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Event reminder scheduler started");

    Ok(())
}

/// Processes events needing reminder notifications
///
/// An event's reminder is stamped only after successful dispatch, so a failed
/// delivery is retried on the next tick.
async fn process_event_reminders(
    db: &DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    lead_minutes: i64,
) -> Result<(), AppError> {
    let now = Utc::now();
    let lead = Duration::minutes(lead_minutes);

    let event_repo = EventRepository::new(db);
    let invitation_repo = InvitationRepository::new(db);
    let user_repo = UserRepository::new(db);

    let due_events = event_repo.get_due_for_reminder(now, lead).await?;

    for event in due_events {
        let mut attendees = invitation_repo.get_accepted_attendees(event.id).await?;

        // The owner is reminded alongside accepted invitees
        if let Some(owner) = user_repo.find_by_id(event.owner_id).await? {
            attendees.insert(0, owner);
        }

        tracing::info!("Sending reminder for event {} ({})", event.id, event.name);

        match notifier.event_reminder(&event, &attendees).await {
            Ok(()) => event_repo.mark_reminder_sent(event.id, now).await?,
            Err(e) => {
                tracing::error!("Failed to deliver reminder for event {}: {}", event.id, e);
            }
        }
    }

    Ok(())
}
