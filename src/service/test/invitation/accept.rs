use super::*;

/// Tests the invitee accepting a pending invitation.
///
/// Expected: Ok with accepted status and response timestamp persisted
#[tokio::test]
async fn invitee_accepts_pending_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, invitee, _event, invitation) =
        factory::helpers::create_invitation_with_dependencies(db).await?;
    let invitee = User::from_entity(invitee);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let accepted = service.accept(&invitee, invitation.id).await?;

    assert_eq!(accepted.status, InvitationStatus::Accepted);
    assert!(accepted.responded_at.is_some());

    let db_invitation = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_invitation.status, "accepted");

    Ok(())
}

/// Tests a user who is not the invitee is rejected.
///
/// Expected: Err(AccessDenied) with the invitation still pending
#[tokio::test]
async fn rejects_non_invitee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _invitee, _event, invitation) =
        factory::helpers::create_invitation_with_dependencies(db).await?;
    let owner = User::from_entity(owner);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let result = service.accept(&owner, invitation.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let db_invitation = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_invitation.status, "pending");

    Ok(())
}

/// Tests a response is terminal: accepting twice is rejected.
///
/// Expected: Err(Validation) on the second response
#[tokio::test]
async fn rejects_second_response() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, invitee, _event, invitation) =
        factory::helpers::create_invitation_with_dependencies(db).await?;
    let invitee = User::from_entity(invitee);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);

    service.accept(&invitee, invitation.id).await?;
    let result = service.accept(&invitee, invitation.id).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests accepting an invitation that was already declined.
///
/// Expected: Err(Validation) with the declined status unchanged
#[tokio::test]
async fn rejects_accept_after_decline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, invitee, _event, invitation) =
        factory::helpers::create_invitation_with_dependencies(db).await?;
    let invitee = User::from_entity(invitee);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);

    service.decline(&invitee, invitation.id).await?;
    let result = service.accept(&invitee, invitation.id).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    let db_invitation = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_invitation.status, "declined");

    Ok(())
}

/// Tests accepting a missing invitation.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = User::from_entity(factory::create_user(db).await?);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let result = service.accept(&member, 4242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
