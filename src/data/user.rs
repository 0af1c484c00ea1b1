//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, queries, and parent role management with proper
//! conversion between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::model::user::{UpsertUserParam, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new user or updates an existing user's name, login timestamp and
    /// optionally their parent role. The role is only updated when explicitly provided
    /// (Some value), preventing accidental removal of the parent role during regular
    /// login operations.
    ///
    /// # Arguments
    /// - `param` - User upsert parameters including subject, name, and optional role grant
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        // Build list of columns to update on conflict
        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::LastLoginAt,
        ];

        // Only update the role column if grant_parent is Some
        if param.grant_parent.is_some() {
            update_columns.push(entity::user::Column::Parent);
        }

        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            subject: ActiveValue::Set(param.subject),
            name: ActiveValue::Set(param.name),
            parent: ActiveValue::Set(param.grant_parent.unwrap_or(false)),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Subject)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their database ID.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their OAuth provider subject.
    ///
    /// # Arguments
    /// - `subject` - Subject identifier issued by the OAuth provider
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that subject
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Subject.eq(subject))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets a page of users ordered by display name.
    ///
    /// # Arguments
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Vector of users and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        Ok((users, total))
    }

    /// Checks whether any user holds the parent role.
    ///
    /// Used at startup to decide whether a setup code must be generated for
    /// bootstrapping the first parent.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one parent user exists
    /// - `Ok(false)` - No parent users exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn has_parent(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Parent.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
