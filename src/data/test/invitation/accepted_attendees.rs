use super::*;
use test_utils::factory::invitation::InvitationFactory;

/// Tests the attendee join returns only users who accepted.
///
/// Expected: accepted invitee present, pending and declined invitees absent
#[tokio::test]
async fn returns_only_accepted_invitees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let accepted = factory::create_user(db).await?;
    let pending = factory::create_user(db).await?;
    let declined = factory::create_user(db).await?;

    InvitationFactory::new(db, event.id, accepted.id)
        .status("accepted")
        .responded_at(Utc::now())
        .build()
        .await?;
    InvitationFactory::new(db, event.id, pending.id).build().await?;
    InvitationFactory::new(db, event.id, declined.id)
        .status("declined")
        .responded_at(Utc::now())
        .build()
        .await?;

    let repo = InvitationRepository::new(db);
    let attendees = repo.get_accepted_attendees(event.id).await?;

    assert_eq!(attendees.len(), 1);
    assert_eq!(attendees[0].id, accepted.id);

    Ok(())
}

/// Tests the attendee join for an event with no responses.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_without_accepted_invitees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _invitee, event, _invitation) =
        factory::helpers::create_invitation_with_dependencies(db).await?;

    let repo = InvitationRepository::new(db);
    let attendees = repo.get_accepted_attendees(event.id).await?;

    assert!(attendees.is_empty());

    Ok(())
}
