//! Invitation domain models, parameters and DTOs.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of an invitation.
///
/// An invitation is issued as `Pending` and transitions exactly once to either
/// `Accepted` or `Declined`; a response is terminal.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

impl InvitationStatus {
    /// Returns the status as the string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// Parses a stored status string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }
}

/// Invitation relating a user to an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    /// Database ID of the invitation.
    pub id: i32,
    /// ID of the related event.
    pub event_id: i32,
    /// ID of the invited user.
    pub user_id: i32,
    /// Current lifecycle state.
    pub status: InvitationStatus,
    /// When the invitation was issued.
    pub created_at: DateTime<Utc>,
    /// When the invitee responded, if they have.
    pub responded_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Converts an entity model to an invitation domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The converted invitation
    /// - `Err(DbErr)` - The stored status string is not a known lifecycle state
    pub fn from_entity(entity: entity::invitation::Model) -> Result<Self, DbErr> {
        let status = InvitationStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown invitation status '{}' for invitation {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            status,
            created_at: entity.created_at,
            responded_at: entity.responded_at,
        })
    }

    /// Converts the invitation domain model to a DTO for API responses.
    ///
    /// # Arguments
    /// - `event_name` - Name of the related event, fetched by the service
    /// - `user_name` - Display name of the invitee, fetched by the service
    pub fn into_dto(self, event_name: String, user_name: String) -> InvitationDto {
        InvitationDto {
            id: self.id,
            event_id: self.event_id,
            event_name,
            user_id: self.user_id,
            user_name,
            status: self.status,
            created_at: self.created_at,
            responded_at: self.responded_at,
        }
    }
}

/// Parameters for issuing an invitation.
#[derive(Debug, Clone)]
pub struct IssueInvitationParam {
    /// ID of the event to invite to.
    pub event_id: i32,
    /// ID of the user being invited.
    pub invitee_id: i32,
}

impl IssueInvitationParam {
    pub fn from_dto(event_id: i32, dto: IssueInvitationDto) -> Self {
        Self {
            event_id,
            invitee_id: dto.user_id,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IssueInvitationDto {
    /// ID of the user being invited.
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InvitationDto {
    pub id: i32,
    pub event_id: i32,
    pub event_name: String,
    pub user_id: i32,
    pub user_name: String,
    pub status: InvitationStatus,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedInvitationsDto {
    pub invitations: Vec<InvitationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
