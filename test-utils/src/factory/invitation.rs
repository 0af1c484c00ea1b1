//! Invitation factory for creating test invitation entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invitations with customizable fields.
///
/// The related event and invitee must already exist. Status defaults to
/// `pending` with no response timestamp.
pub struct InvitationFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: i32,
    status: String,
    responded_at: Option<DateTime<Utc>>,
}

impl<'a> InvitationFactory<'a> {
    /// Creates a new InvitationFactory with default values.
    ///
    /// Defaults:
    /// - status: `"pending"`
    /// - responded_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - ID of the related event
    /// - `user_id` - ID of the invited user
    ///
    /// # Returns
    /// - `InvitationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, event_id: i32, user_id: i32) -> Self {
        Self {
            db,
            event_id,
            user_id,
            status: "pending".to_string(),
            responded_at: None,
        }
    }

    /// Sets the invitation status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the response timestamp.
    pub fn responded_at(mut self, responded_at: DateTime<Utc>) -> Self {
        self.responded_at = Some(responded_at);
        self
    }

    /// Builds and inserts the invitation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::invitation::Model)` - Created invitation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::invitation::Model, DbErr> {
        entity::invitation::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            responded_at: ActiveValue::Set(self.responded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending invitation with default values.
///
/// Shorthand for `InvitationFactory::new(db, event_id, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - ID of the related event
/// - `user_id` - ID of the invited user
///
/// # Returns
/// - `Ok(entity::invitation::Model)` - Created invitation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_invitation(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::invitation::Model, DbErr> {
    InvitationFactory::new(db, event_id, user_id).build().await
}
