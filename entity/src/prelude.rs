pub use super::event::Entity as Event;
pub use super::invitation::Entity as Invitation;
pub use super::user::Entity as User;
