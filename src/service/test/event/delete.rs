use super::*;

/// Tests the owner deleting their event.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn owner_deletes_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let owner = User::from_entity(owner);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    service.delete(&owner, event.id).await?;

    let count = entity::prelude::Event::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests a non-owner is rejected.
///
/// Expected: Err(AccessDenied) with the event still present
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let other_parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let result = service.delete(&other_parent, event.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let count = entity::prelude::Event::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting a missing event.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let result = service.delete(&parent, 4242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
