use crate::{data::user::UserRepository, model::user::UpsertUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod get_paginated;
