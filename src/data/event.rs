use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::event::{Event, EventDraft};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a validated event draft.
    ///
    /// # Arguments
    /// - `draft` - Validated in-memory candidate produced by the service's build step
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(DbErr)` - Database error or constraint violation
    pub async fn create(&self, draft: EventDraft) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            owner_id: ActiveValue::Set(draft.owner_id),
            name: ActiveValue::Set(draft.name),
            description: ActiveValue::Set(draft.description),
            start_at: ActiveValue::Set(draft.start_at),
            end_at: ActiveValue::Set(draft.end_at),
            reminder_sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    /// Gets an event by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The event
    /// - `Ok(None)` - Event not found
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets paginated events ordered by start time (soonest first).
    ///
    /// Events that started more than one hour ago are excluded from the listing.
    ///
    /// # Arguments
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok((events, total))` - Vector of events and total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_upcoming_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Event>, u64), DbErr> {
        let cutoff = Utc::now() - Duration::hours(1);

        let paginator = entity::prelude::Event::find()
            .filter(entity::event::Column::StartAt.gte(cutoff))
            .order_by_asc(entity::event::Column::StartAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let events = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect();

        Ok((events, total))
    }

    /// Updates an event from a validated draft.
    ///
    /// The owner is never changed by an update.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The updated event
    /// - `Ok(None)` - Event not found
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, draft: EventDraft) -> Result<Option<Event>, DbErr> {
        let Some(model) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = model.into();
        active.name = ActiveValue::Set(draft.name);
        active.description = ActiveValue::Set(draft.description);
        active.start_at = ActiveValue::Set(draft.start_at);
        active.end_at = ActiveValue::Set(draft.end_at);

        let updated = active.update(self.db).await?;

        Ok(Some(Event::from_entity(updated)))
    }

    /// Deletes an event by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Event deleted
    /// - `Ok(false)` - Event not found
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets events whose reminder is due.
    ///
    /// Selects events that have not had their reminder dispatched yet and whose
    /// start time falls inside the lead window `(now, now + lead]`.
    ///
    /// # Arguments
    /// - `now` - Current time
    /// - `lead` - How far ahead of the start time reminders are dispatched
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Events due for a reminder
    /// - `Err(DbErr)` - Database error
    pub async fn get_due_for_reminder(
        &self,
        now: DateTime<Utc>,
        lead: Duration,
    ) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::ReminderSentAt.is_null())
            .filter(entity::event::Column::StartAt.gt(now))
            .filter(entity::event::Column::StartAt.lte(now + lead))
            .order_by_asc(entity::event::Column::StartAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Stamps an event's reminder as dispatched.
    ///
    /// # Arguments
    /// - `id` - Event ID
    /// - `sent_at` - Dispatch time
    ///
    /// # Returns
    /// - `Ok(())` - Reminder stamped (or event no longer exists)
    /// - `Err(DbErr)` - Database error
    pub async fn mark_reminder_sent(&self, id: i32, sent_at: DateTime<Utc>) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(());
        };

        let mut active: entity::event::ActiveModel = model.into();
        active.reminder_sent_at = ActiveValue::Set(Some(sent_at));
        active.update(self.db).await?;

        Ok(())
    }
}
