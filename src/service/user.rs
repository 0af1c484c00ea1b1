use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{PaginatedUsersDto, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the member directory, ordered by display name.
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsersDto)`: Paginated user list
    /// - `Err(AppError)`: Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsersDto, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedUsersDto {
            users: users.into_iter().map(User::into_dto).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }
}
