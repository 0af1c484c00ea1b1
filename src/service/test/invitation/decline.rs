use super::*;

/// Tests the invitee declining a pending invitation.
///
/// Expected: Ok with declined status and response timestamp persisted
#[tokio::test]
async fn invitee_declines_pending_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, invitee, _event, invitation) =
        factory::helpers::create_invitation_with_dependencies(db).await?;
    let invitee = User::from_entity(invitee);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let declined = service.decline(&invitee, invitation.id).await?;

    assert_eq!(declined.status, InvitationStatus::Declined);
    assert!(declined.responded_at.is_some());

    let db_invitation = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_invitation.status, "declined");

    Ok(())
}

/// Tests a response is terminal: declining after accepting is rejected.
///
/// Expected: Err(Validation) with the accepted status unchanged
#[tokio::test]
async fn rejects_decline_after_accept() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, invitee, _event, invitation) =
        factory::helpers::create_invitation_with_dependencies(db).await?;
    let invitee = User::from_entity(invitee);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);

    service.accept(&invitee, invitation.id).await?;
    let result = service.decline(&invitee, invitation.id).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    let db_invitation = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_invitation.status, "accepted");

    Ok(())
}
