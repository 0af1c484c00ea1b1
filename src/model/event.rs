//! Event domain models, parameters and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Scheduled event owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Database ID of the event.
    pub id: i32,
    /// ID of the owning user.
    pub owner_id: i32,
    /// Event name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Scheduled start time.
    pub start_at: DateTime<Utc>,
    /// Optional scheduled end time.
    pub end_at: Option<DateTime<Utc>>,
    /// When the reminder notification was dispatched, if it has been.
    pub reminder_sent_at: Option<DateTime<Utc>>,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            start_at: entity.start_at,
            end_at: entity.end_at,
            reminder_sent_at: entity.reminder_sent_at,
            created_at: entity.created_at,
        }
    }

    /// Converts the event domain model to a DTO for API responses.
    ///
    /// # Arguments
    /// - `owner_name` - Display name of the owning user, fetched by the service
    pub fn into_dto(self, owner_name: String) -> EventDto {
        EventDto {
            id: self.id,
            owner_id: self.owner_id,
            owner_name,
            name: self.name,
            description: self.description,
            start_at: self.start_at,
            end_at: self.end_at,
            created_at: self.created_at,
        }
    }

    /// Converts the event domain model to a list item DTO.
    pub fn into_list_item_dto(self, owner_name: String) -> EventListItemDto {
        EventListItemDto {
            id: self.id,
            owner_id: self.owner_id,
            owner_name,
            name: self.name,
            start_at: self.start_at,
            end_at: self.end_at,
        }
    }
}

/// Validated in-memory candidate for a new event.
///
/// Produced by the event service's build step after input validation and consumed
/// by the repository's persist step.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    /// ID of the owning user.
    pub owner_id: i32,
    /// Event name, trimmed and non-empty.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Scheduled start time.
    pub start_at: DateTime<Utc>,
    /// Optional scheduled end time, after `start_at`.
    pub end_at: Option<DateTime<Utc>>,
}

/// Parameters for creating an event.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub name: String,
    /// Raw start time in "YYYY-MM-DD HH:MM" format or "now".
    pub start_at: String,
    /// Raw end time in "YYYY-MM-DD HH:MM" format.
    pub end_at: Option<String>,
    pub description: Option<String>,
}

impl CreateEventParam {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            name: dto.name,
            start_at: dto.start_at,
            end_at: dto.end_at,
            description: dto.description,
        }
    }
}

/// Parameters for updating an event.
#[derive(Debug, Clone)]
pub struct UpdateEventParam {
    pub name: String,
    /// Raw start time in "YYYY-MM-DD HH:MM" format or "now".
    pub start_at: String,
    /// Raw end time in "YYYY-MM-DD HH:MM" format.
    pub end_at: Option<String>,
    pub description: Option<String>,
}

impl UpdateEventParam {
    pub fn from_dto(dto: UpdateEventDto) -> Self {
        Self {
            name: dto.name,
            start_at: dto.start_at,
            end_at: dto.end_at,
            description: dto.description,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventDto {
    pub name: String,
    pub start_at: String, // Format: "YYYY-MM-DD HH:MM" in UTC or "now"
    pub end_at: Option<String>, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateEventDto {
    pub name: String,
    pub start_at: String, // Format: "YYYY-MM-DD HH:MM" in UTC or "now"
    pub end_at: Option<String>, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub owner_id: i32,
    pub owner_name: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventListItemDto {
    pub id: i32,
    pub owner_id: i32,
    pub owner_name: String,
    pub name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub end_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedEventsDto {
    pub events: Vec<EventListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
