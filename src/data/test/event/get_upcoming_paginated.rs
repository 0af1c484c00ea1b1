use super::*;
use test_utils::factory::event::EventFactory;

/// Tests events that started more than one hour ago are excluded.
///
/// Expected: only the future event is returned
#[tokio::test]
async fn excludes_events_older_than_one_hour() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_parent(db).await?;

    EventFactory::new(db, owner.id)
        .name("Long Over")
        .start_at(Utc::now() - Duration::hours(3))
        .build()
        .await?;
    let upcoming = EventFactory::new(db, owner.id)
        .name("Upcoming")
        .start_at(Utc::now() + Duration::hours(3))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (events, total) = repo.get_upcoming_paginated(0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, upcoming.id);

    Ok(())
}

/// Tests events that started less than one hour ago are still listed.
///
/// Expected: the recently started event is returned
#[tokio::test]
async fn includes_recently_started_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_parent(db).await?;

    let started = EventFactory::new(db, owner.id)
        .name("Just Started")
        .start_at(Utc::now() - Duration::minutes(30))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (events, total) = repo.get_upcoming_paginated(0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(events[0].id, started.id);

    Ok(())
}

/// Tests pagination across multiple events.
///
/// Expected: page size respected with correct total
#[tokio::test]
async fn paginates_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_parent(db).await?;

    for hours in 1..=3 {
        EventFactory::new(db, owner.id)
            .start_at(Utc::now() + Duration::hours(hours))
            .build()
            .await?;
    }

    let repo = EventRepository::new(db);

    let (page0, total) = repo.get_upcoming_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page0.len(), 2);

    let (page1, _) = repo.get_upcoming_paginated(1, 2).await?;
    assert_eq!(page1.len(), 1);

    Ok(())
}

/// Tests events are ordered by start time, soonest first.
///
/// Expected: ascending start times
#[tokio::test]
async fn orders_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_parent(db).await?;

    let later = EventFactory::new(db, owner.id)
        .start_at(Utc::now() + Duration::days(7))
        .build()
        .await?;
    let sooner = EventFactory::new(db, owner.id)
        .start_at(Utc::now() + Duration::hours(2))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (events, _) = repo.get_upcoming_paginated(0, 10).await?;

    assert_eq!(events[0].id, sooner.id);
    assert_eq!(events[1].id, later.id);

    Ok(())
}
