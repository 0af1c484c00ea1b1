//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// Provides a builder pattern for creating event entities with default values
/// that can be overridden as needed for specific test scenarios. The owning
/// user must already exist.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: Option<String>,
    start_at: DateTime<Utc>,
    end_at: Option<DateTime<Utc>>,
    reminder_sent_at: Option<DateTime<Utc>>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"` where id is auto-incremented
    /// - description: `None`
    /// - start_at: one day in the future
    /// - end_at: `None`
    /// - reminder_sent_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user that owns the event
    ///
    /// # Returns
    /// - `EventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Event {}", id),
            description: None,
            start_at: Utc::now() + Duration::days(1),
            end_at: None,
            reminder_sent_at: None,
        }
    }

    /// Sets the event name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the event description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the scheduled start time.
    pub fn start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = start_at;
        self
    }

    /// Sets the scheduled end time.
    pub fn end_at(mut self, end_at: DateTime<Utc>) -> Self {
        self.end_at = Some(end_at);
        self
    }

    /// Marks the reminder notification as already sent at the given time.
    pub fn reminder_sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.reminder_sent_at = Some(sent_at);
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            start_at: ActiveValue::Set(self.start_at),
            end_at: ActiveValue::Set(self.end_at),
            reminder_sent_at: ActiveValue::Set(self.reminder_sent_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the given owner.
///
/// Shorthand for `EventFactory::new(db, owner_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - ID of the user that owns the event
///
/// # Returns
/// - `Ok(entity::event::Model)` - Created event entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, owner_id).build().await
}
