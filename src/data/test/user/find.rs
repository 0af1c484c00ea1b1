use super::*;

/// Tests finding a user by database ID.
///
/// Expected: Ok(Some) for an existing user, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(user.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().subject, user.subject);

    let missing = repo.find_by_id(4242).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests finding a user by OAuth subject.
///
/// Expected: Ok(Some) for an existing subject, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::UserFactory::new(db)
        .subject("provider|42")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_subject("provider|42").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, user.id);

    let missing = repo.find_by_subject("provider|unknown").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the parent existence check.
///
/// Expected: false without parents, true once one exists
#[tokio::test]
async fn detects_parent_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    factory::create_user(db).await?;
    assert!(!repo.has_parent().await?);

    factory::create_parent(db).await?;
    assert!(repo.has_parent().await?);

    Ok(())
}
