use super::*;

/// Tests a parent creating a valid event.
///
/// Verifies the full step sequence: the event is persisted and exactly one
/// creation notification is dispatched.
///
/// Expected: Ok with persisted event and one dispatch
#[tokio::test]
async fn creates_event_as_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let event = service
        .create(
            &parent,
            CreateEventParam {
                name: "Movie Night".to_string(),
                start_at: time_from_now(Duration::days(2)),
                end_at: None,
                description: Some("Popcorn provided".to_string()),
            },
        )
        .await?;

    assert_eq!(event.name, "Movie Night");
    assert_eq!(event.owner_id, parent.id);
    assert_eq!(event.owner_name, parent.name);

    // Exactly one row persisted
    let count = entity::prelude::Event::find().count(db).await?;
    assert_eq!(count, 1);

    // Exactly one dispatch, carrying the persisted event's ID
    assert_eq!(notifier.calls(), vec![NotifierCall::EventCreated(event.id)]);

    Ok(())
}

/// Tests a non-parent is rejected at the authorize step.
///
/// Verifies the short-circuit property: no event is persisted and no
/// notification is dispatched.
///
/// Expected: Err(AccessDenied) with no side effects
#[tokio::test]
async fn rejects_non_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = User::from_entity(factory::create_user(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let result = service
        .create(
            &member,
            CreateEventParam {
                name: "Movie Night".to_string(),
                start_at: time_from_now(Duration::days(2)),
                end_at: None,
                description: None,
            },
        )
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, member.id);
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    // Authorization failed, so nothing was persisted and nothing dispatched
    let count = entity::prelude::Event::find().count(db).await?;
    assert_eq!(count, 0);
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests an empty name is rejected at the build step.
///
/// Expected: Err(Validation) with no side effects
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let result = service
        .create(
            &parent,
            CreateEventParam {
                name: "   ".to_string(),
                start_at: time_from_now(Duration::days(2)),
                end_at: None,
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    let count = entity::prelude::Event::find().count(db).await?;
    assert_eq!(count, 0);
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests a start time in the past is rejected at the build step.
///
/// Expected: Err(Validation) with no side effects
#[tokio::test]
async fn rejects_start_in_past() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let result = service
        .create(
            &parent,
            CreateEventParam {
                name: "Yesterday's Party".to_string(),
                start_at: time_from_now(-Duration::hours(2)),
                end_at: None,
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests an unparseable start time is rejected at the build step.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_malformed_start_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let result = service
        .create(
            &parent,
            CreateEventParam {
                name: "Movie Night".to_string(),
                start_at: "next tuesday".to_string(),
                end_at: None,
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests an end time before the start time is rejected at the build step.
///
/// Expected: Err(Validation) with no side effects
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let result = service
        .create(
            &parent,
            CreateEventParam {
                name: "Movie Night".to_string(),
                start_at: time_from_now(Duration::hours(4)),
                end_at: Some(time_from_now(Duration::hours(2))),
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    let count = entity::prelude::Event::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests a notification failure does not fail the operation.
///
/// Verifies the best-effort dispatch policy: the event stays persisted and the
/// caller still receives success.
///
/// Expected: Ok with the event persisted despite the failed dispatch
#[tokio::test]
async fn succeeds_when_notification_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::failing();

    let service = EventService::new(db, &notifier);
    let event = service
        .create(
            &parent,
            CreateEventParam {
                name: "Movie Night".to_string(),
                start_at: time_from_now(Duration::days(2)),
                end_at: None,
                description: None,
            },
        )
        .await?;

    // The dispatch was attempted and failed, yet the event is persisted
    assert_eq!(notifier.calls(), vec![NotifierCall::EventCreated(event.id)]);
    let count = entity::prelude::Event::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests a persist failure skips the dispatch step.
///
/// The event table is deliberately missing, so the persist step fails with a
/// database error after authorize and build succeeded.
///
/// Expected: Err(DbErr) with no dispatch
#[tokio::test]
async fn persist_failure_skips_dispatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);
    let result = service
        .create(
            &parent,
            CreateEventParam {
                name: "Movie Night".to_string(),
                start_at: time_from_now(Duration::days(2)),
                end_at: None,
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests sequential invocations share no state.
///
/// Two creations with different inputs produce two independent events, and each
/// dispatch carries its own event's ID.
///
/// Expected: two distinct persisted events, two matching dispatches
#[tokio::test]
async fn sequential_invocations_share_no_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let notifier = RecordingNotifier::new();

    let service = EventService::new(db, &notifier);

    let first = service
        .create(
            &parent,
            CreateEventParam {
                name: "First".to_string(),
                start_at: time_from_now(Duration::days(1)),
                end_at: None,
                description: Some("first description".to_string()),
            },
        )
        .await?;

    let second = service
        .create(
            &parent,
            CreateEventParam {
                name: "Second".to_string(),
                start_at: time_from_now(Duration::days(3)),
                end_at: None,
                description: None,
            },
        )
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "First");
    assert_eq!(second.name, "Second");
    // Nothing from the first invocation leaked into the second
    assert!(second.description.is_none());

    assert_eq!(
        notifier.calls(),
        vec![
            NotifierCall::EventCreated(first.id),
            NotifierCall::EventCreated(second.id),
        ]
    );

    Ok(())
}
