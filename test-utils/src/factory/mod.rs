//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (owner, event) = factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .subject("provider|12345")
//!     .name("CustomUser")
//!     .parent(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `event` - Create event entities
//! - `invitation` - Create invitation entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod event;
pub mod helpers;
pub mod invitation;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use event::create_event;
pub use invitation::create_invitation;
pub use user::{create_parent, create_user};
