//! User domain models and parameters.
//!
//! Provides domain models for application users with OAuth provider identity and
//! role tracking. Includes parameter types for user creation and updates during
//! authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User with provider identity and role flags.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database ID of the user.
    pub id: i32,
    /// Subject identifier issued by the OAuth provider.
    pub subject: String,
    /// Display name of the user.
    pub name: String,
    /// Whether the user holds the parent role.
    pub parent: bool,
    /// When the user first logged in.
    pub created_at: DateTime<Utc>,
    /// When the user last logged in.
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            subject: entity.subject,
            name: entity.name,
            parent: entity.parent,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The provider subject is deliberately not exposed.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            parent: self.parent,
        }
    }
}

/// Parameters for upserting a user during login.
///
/// Creates new users or updates existing user information. The optional
/// `grant_parent` field preserves the stored parent role when `None`, so regular
/// logins never revoke a previously granted role.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Subject identifier issued by the OAuth provider.
    pub subject: String,
    /// Display name of the user.
    pub name: String,
    /// Grants the parent role when `Some(true)`; `None` keeps the stored flag.
    pub grant_parent: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub parent: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
