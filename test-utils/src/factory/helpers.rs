//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event together with its owning parent user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, event))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::event::Model), DbErr> {
    let owner = crate::factory::user::create_parent(db).await?;
    let event = crate::factory::event::create_event(db, owner.id).await?;

    Ok((owner, event))
}

/// Creates a pending invitation together with its full dependency chain.
///
/// Creates an owning parent user, an invitee, an event and a pending
/// invitation relating the invitee to the event.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, invitee, event, invitation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_invitation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::event::Model,
        entity::invitation::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_parent(db).await?;
    let invitee = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db, owner.id).await?;
    let invitation = crate::factory::invitation::create_invitation(db, event.id, invitee.id).await?;

    Ok((owner, invitee, event, invitation))
}
