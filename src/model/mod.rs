//! Domain models, operation parameters and API DTOs.
//!
//! This module contains the domain models used throughout the service layer, the
//! named-field parameter types that form each service operation's input surface,
//! and the serde DTOs exchanged at the HTTP boundary. Domain models are converted
//! from entity models at the repository boundary and transformed to DTOs at the
//! controller boundary.

pub mod api;
pub mod event;
pub mod invitation;
pub mod user;
