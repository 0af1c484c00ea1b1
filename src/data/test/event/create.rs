use super::*;

/// Tests creating an event with only the required fields.
///
/// Verifies that the repository persists a draft with name and start time and
/// leaves the optional fields unset.
///
/// Expected: Ok with event created
#[tokio::test]
async fn creates_event_with_required_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_parent(db).await?;
    let start_at = Utc::now() + Duration::days(2);

    let repo = EventRepository::new(db);
    let event = repo
        .create(EventDraft {
            owner_id: owner.id,
            name: "Movie Night".to_string(),
            description: None,
            start_at,
            end_at: None,
        })
        .await?;

    assert_eq!(event.owner_id, owner.id);
    assert_eq!(event.name, "Movie Night");
    assert!(event.description.is_none());
    assert_eq!(event.start_at, start_at);
    assert!(event.end_at.is_none());
    assert!(event.reminder_sent_at.is_none());

    // Verify event exists in database
    let db_event = entity::prelude::Event::find_by_id(event.id).one(db).await?;
    assert!(db_event.is_some());
    assert_eq!(db_event.unwrap().name, "Movie Night");

    Ok(())
}

/// Tests creating an event with all optional fields set.
///
/// Expected: Ok with description and end time persisted
#[tokio::test]
async fn creates_event_with_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_parent(db).await?;
    let start_at = Utc::now() + Duration::days(2);
    let end_at = start_at + Duration::hours(3);

    let repo = EventRepository::new(db);
    let event = repo
        .create(EventDraft {
            owner_id: owner.id,
            name: "Picnic".to_string(),
            description: Some("Bring snacks".to_string()),
            start_at,
            end_at: Some(end_at),
        })
        .await?;

    assert_eq!(event.description.as_deref(), Some("Bring snacks"));
    assert_eq!(event.end_at, Some(end_at));

    Ok(())
}
