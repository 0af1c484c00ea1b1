use super::*;

/// Tests deleting an existing event.
///
/// Expected: Ok(true) with the row removed
#[tokio::test]
async fn deletes_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    let deleted = repo.delete(event.id).await?;

    assert!(deleted);

    let db_event = entity::prelude::Event::find_by_id(event.id).one(db).await?;
    assert!(db_event.is_none());

    Ok(())
}

/// Tests deleting a missing event.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let deleted = repo.delete(4242).await?;

    assert!(!deleted);

    Ok(())
}
