use crate::{data::invitation::InvitationRepository, model::invitation::InvitationStatus};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod accepted_attendees;
