use crate::{data::event::EventRepository, model::event::EventDraft};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_upcoming_paginated;
