use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    invitation::{Invitation, InvitationStatus},
    user::User,
};

pub struct InvitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending invitation relating a user to an event.
    ///
    /// # Arguments
    /// - `event_id` - ID of the related event
    /// - `user_id` - ID of the invited user
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The created invitation with `pending` status
    /// - `Err(DbErr)` - Database error or constraint violation
    pub async fn create(&self, event_id: i32, user_id: i32) -> Result<Invitation, DbErr> {
        let entity = entity::invitation::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(InvitationStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            responded_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Invitation::from_entity(entity)
    }

    /// Gets an invitation by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - The invitation
    /// - `Ok(None)` - Invitation not found
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Invitation::from_entity).transpose()
    }

    /// Gets the invitation relating a user to an event, if one exists.
    ///
    /// Used by the issue operation to reject duplicate invitations.
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - An invitation already exists for the pair
    /// - `Ok(None)` - No invitation for the pair
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::EventId.eq(event_id))
            .filter(entity::invitation::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(Invitation::from_entity).transpose()
    }

    /// Gets a page of a user's invitations, most recently issued first.
    ///
    /// # Arguments
    /// - `user_id` - ID of the invited user
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok((invitations, total))` - Vector of invitations and total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Invitation>, u64), DbErr> {
        let paginator = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::UserId.eq(user_id))
            .order_by_desc(entity::invitation::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let invitations = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Invitation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((invitations, total))
    }

    /// Gets all invitations for an event, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Invitation>)` - Invitations for the event
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<Invitation>, DbErr> {
        let entities = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::EventId.eq(event_id))
            .order_by_asc(entity::invitation::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(Invitation::from_entity)
            .collect::<Result<Vec<_>, _>>()
    }

    /// Transitions an invitation's lifecycle state.
    ///
    /// # Arguments
    /// - `id` - Invitation ID
    /// - `status` - New lifecycle state
    /// - `responded_at` - Response timestamp to stamp
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - The updated invitation
    /// - `Ok(None)` - Invitation not found
    /// - `Err(DbErr)` - Database error
    pub async fn set_status(
        &self,
        id: i32,
        status: InvitationStatus,
        responded_at: DateTime<Utc>,
    ) -> Result<Option<Invitation>, DbErr> {
        let Some(model) = entity::prelude::Invitation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::invitation::ActiveModel = model.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.responded_at = ActiveValue::Set(Some(responded_at));

        let updated = active.update(self.db).await?;

        Invitation::from_entity(updated).map(Some)
    }

    /// Gets the users who accepted their invitation to an event.
    ///
    /// Used by the reminder scheduler to build the attendee list.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Accepted invitees
    /// - `Err(DbErr)` - Database error
    pub async fn get_accepted_attendees(&self, event_id: i32) -> Result<Vec<User>, DbErr> {
        let rows = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::EventId.eq(event_id))
            .filter(entity::invitation::Column::Status.eq(InvitationStatus::Accepted.as_str()))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user.map(User::from_entity))
            .collect())
    }
}
