use super::*;
use test_utils::factory::user::UserFactory;

/// Tests users are ordered by display name.
///
/// Expected: ascending name order
#[tokio::test]
async fn orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Charlie").build().await?;
    UserFactory::new(db).name("Alice").build().await?;
    UserFactory::new(db).name("Bob").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_paginated(0, 10).await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}

/// Tests pagination across the member directory.
///
/// Expected: page size respected with correct total
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (page0, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page0.len(), 2);

    let (page1, _) = repo.get_paginated(1, 2).await?;
    assert_eq!(page1.len(), 1);

    Ok(())
}
