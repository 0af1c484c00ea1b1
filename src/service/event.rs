use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{event::EventRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        event::{
            CreateEventParam, Event, EventDraft, EventDto, PaginatedEventsDto, UpdateEventParam,
        },
        user::User,
    },
    service::notify::Notifier,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Creates a new event.
    ///
    /// Runs the fixed step sequence: authorize, build, persist, dispatch. A failing
    /// step aborts the remaining ones. The notification dispatch is best-effort and
    /// never fails the operation.
    ///
    /// # Arguments
    /// - `acting_user`: The authenticated user performing the operation
    /// - `param`: Event creation data
    ///
    /// # Returns
    /// - `Ok(EventDto)`: The created event with enriched data
    /// - `Err(AppError)`: Authorization, validation or database error
    pub async fn create(
        &self,
        acting_user: &User,
        param: CreateEventParam,
    ) -> Result<EventDto, AppError> {
        Self::authorize_create(acting_user)?;

        let draft = Self::build(acting_user, param)?;

        let event = self.persist(draft).await?;

        self.dispatch_created(acting_user, &event).await;

        self.get_by_id(event.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found after creation".to_string()))
    }

    /// Gets an event by ID with enriched data (owner name).
    ///
    /// # Returns
    /// - `Ok(Some(EventDto))`: The event with enriched data
    /// - `Ok(None)`: Event not found
    /// - `Err(AppError)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventDto>, AppError> {
        let repo = EventRepository::new(self.db);

        let Some(event) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let owner = UserRepository::new(self.db)
            .find_by_id(event.owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event owner not found".to_string()))?;

        Ok(Some(event.into_dto(owner.name)))
    }

    /// Gets paginated upcoming events.
    ///
    /// Events that started more than 1 hour ago are excluded.
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok(PaginatedEventsDto)`: Paginated event list with enriched data
    /// - `Err(AppError)`: Database error
    pub async fn get_upcoming_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedEventsDto, AppError> {
        let repo = EventRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let (events, total) = repo.get_upcoming_paginated(page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        // Enrich event data with owner names
        let mut event_list = Vec::new();

        for event in events {
            let owner = user_repo.find_by_id(event.owner_id).await?;

            if let Some(owner) = owner {
                event_list.push(event.into_list_item_dto(owner.name));
            }
        }

        Ok(PaginatedEventsDto {
            events: event_list,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates an event.
    ///
    /// Only the owner may update an event. The update is re-validated like a
    /// creation, with an allowance for events whose original start time has
    /// already passed.
    ///
    /// # Arguments
    /// - `acting_user`: The authenticated user performing the operation
    /// - `id`: Event ID
    /// - `param`: Update data
    ///
    /// # Returns
    /// - `Ok(EventDto)`: The updated event with enriched data
    /// - `Err(AppError)`: Authorization, validation or database error
    pub async fn update(
        &self,
        acting_user: &User,
        id: i32,
        param: UpdateEventParam,
    ) -> Result<EventDto, AppError> {
        let repo = EventRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Event not found".to_string()));
        };

        Self::authorize_modify(acting_user, &existing)?;

        let draft = Self::build_update(&existing, param)?;

        repo.update(id, draft).await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found after update".to_string()))
    }

    /// Deletes an event.
    ///
    /// Only the owner may delete an event.
    ///
    /// # Arguments
    /// - `acting_user`: The authenticated user performing the operation
    /// - `id`: Event ID
    ///
    /// # Returns
    /// - `Ok(())`: Event deleted
    /// - `Err(AppError)`: Authorization or database error, or event not found
    pub async fn delete(&self, acting_user: &User, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Event not found".to_string()));
        };

        Self::authorize_modify(acting_user, &existing)?;

        repo.delete(id).await?;

        Ok(())
    }

    /// Authorize step: only parents may create events.
    fn authorize_create(acting_user: &User) -> Result<(), AppError> {
        if !acting_user.parent {
            return Err(AuthError::AccessDenied(
                acting_user.id,
                "User attempted to create an event without the parent role".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Authorize step for mutations: only the owner may modify an event.
    fn authorize_modify(acting_user: &User, event: &Event) -> Result<(), AppError> {
        if event.owner_id != acting_user.id {
            return Err(AuthError::AccessDenied(
                acting_user.id,
                format!("User attempted to modify event {} they do not own", event.id),
            )
            .into());
        }

        Ok(())
    }

    /// Build step: validates inputs and constructs the in-memory candidate event.
    fn build(acting_user: &User, param: CreateEventParam) -> Result<EventDraft, AppError> {
        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Event name must not be empty".to_string(),
            ));
        }

        let start_at = Self::parse_event_time(&param.start_at)?;
        let end_at = Self::parse_end_time(param.end_at.as_deref(), start_at)?;

        Ok(EventDraft {
            owner_id: acting_user.id,
            name,
            description: param.description,
            start_at,
            end_at,
        })
    }

    /// Build step for updates: same validation as `build`, keeping the original
    /// owner and allowing a start time no earlier than the original when that
    /// original is already in the past.
    fn build_update(existing: &Event, param: UpdateEventParam) -> Result<EventDraft, AppError> {
        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Event name must not be empty".to_string(),
            ));
        }

        let start_at = Self::parse_event_time_with_min(&param.start_at, Some(existing.start_at))?;
        let end_at = Self::parse_end_time(param.end_at.as_deref(), start_at)?;

        Ok(EventDraft {
            owner_id: existing.owner_id,
            name,
            description: param.description,
            start_at,
            end_at,
        })
    }

    /// Persist step: commits the candidate event to the store.
    async fn persist(&self, draft: EventDraft) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db).create(draft).await?;

        Ok(event)
    }

    /// Dispatch step: announces the created event.
    ///
    /// Best-effort: a failed announcement is logged and never rolls back the
    /// persisted event.
    async fn dispatch_created(&self, owner: &User, event: &Event) {
        if let Err(err) = self.notifier.event_created(event, owner).await {
            tracing::warn!(
                "Failed to deliver creation notification for event {}: {}",
                event.id,
                err
            );
        }
    }

    /// Parses an event time from "YYYY-MM-DD HH:MM" format or "now" to DateTime<Utc>
    ///
    /// Validates that the event time is not in the past.
    ///
    /// # Arguments
    /// - `time_str`: Time string in format "YYYY-MM-DD HH:MM" or "now" (case-insensitive)
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)`: Parsed datetime
    /// - `Err(AppError)`: Invalid format or time is in the past
    fn parse_event_time(time_str: &str) -> Result<DateTime<Utc>, AppError> {
        Self::parse_event_time_with_min(time_str, None)
    }

    /// Parse an event time with optional minimum time for edit validation
    ///
    /// # Arguments
    /// - `time_str`: Time string in format "YYYY-MM-DD HH:MM" or "now"
    /// - `min_time`: Optional minimum time (for edits where original time is in the past)
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)`: Parsed event time
    /// - `Err(AppError)`: Invalid format or time validation failure
    fn parse_event_time_with_min(
        time_str: &str,
        min_time: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, AppError> {
        let now = Utc::now();

        // Handle "now" shorthand (case-insensitive)
        let event_time = if time_str.trim().eq_ignore_ascii_case("now") {
            now
        } else {
            NaiveDateTime::parse_from_str(time_str, "%Y-%m-%d %H:%M")
                .map(|naive| naive.and_utc())
                .map_err(|e| {
                    AppError::Validation(format!(
                        "Invalid event time format. Expected 'YYYY-MM-DD HH:MM' or 'now', got '{}': {}",
                        time_str, e
                    ))
                })?
        };

        // If min_time is provided and is in the past, validate against min_time
        if let Some(min_time) = min_time {
            if min_time < now && event_time < min_time {
                return Err(AppError::Validation(format!(
                    "Event start cannot be set earlier than the original time ({})",
                    min_time.format("%Y-%m-%d %H:%M UTC")
                )));
            }
        }

        // Validate event time is not in the past (only if min_time is not provided or is in the future)
        if min_time.is_none() || min_time.map(|t| t >= now).unwrap_or(true) {
            if event_time < now {
                return Err(AppError::Validation(
                    "Event start cannot be in the past".to_string(),
                ));
            }
        }

        Ok(event_time)
    }

    /// Parses the optional end time and checks it falls after the start time.
    fn parse_end_time(
        time_str: Option<&str>,
        start_at: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, AppError> {
        let Some(time_str) = time_str else {
            return Ok(None);
        };

        let end_at = NaiveDateTime::parse_from_str(time_str, "%Y-%m-%d %H:%M")
            .map(|naive| naive.and_utc())
            .map_err(|e| {
                AppError::Validation(format!(
                    "Invalid event end time format. Expected 'YYYY-MM-DD HH:MM', got '{}': {}",
                    time_str, e
                ))
            })?;

        if end_at <= start_at {
            return Err(AppError::Validation(
                "Event end time must be after the start time".to_string(),
            ));
        }

        Ok(Some(end_at))
    }
}
