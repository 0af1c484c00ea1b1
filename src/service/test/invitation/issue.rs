use super::*;

/// Tests the event owner issuing an invitation.
///
/// Verifies the full step sequence: the invitation is persisted as pending and
/// exactly one notification is dispatched.
///
/// Expected: Ok with persisted invitation and one dispatch
#[tokio::test]
async fn owner_issues_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let owner = User::from_entity(owner);
    let invitee = factory::create_user(db).await?;
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let invitation = service
        .issue(
            &owner,
            IssueInvitationParam {
                event_id: event.id,
                invitee_id: invitee.id,
            },
        )
        .await?;

    assert_eq!(invitation.event_id, event.id);
    assert_eq!(invitation.user_id, invitee.id);
    assert_eq!(invitation.status, InvitationStatus::Pending);
    assert_eq!(invitation.event_name, event.name);
    assert_eq!(invitation.user_name, invitee.name);

    let count = entity::prelude::Invitation::find().count(db).await?;
    assert_eq!(count, 1);

    assert_eq!(
        notifier.calls(),
        vec![NotifierCall::InvitationIssued(invitation.id)]
    );

    Ok(())
}

/// Tests a non-owner is rejected at the authorize step.
///
/// Verifies the short-circuit property: nothing is persisted and nothing
/// dispatched.
///
/// Expected: Err(AccessDenied) with no side effects
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let other_parent = User::from_entity(factory::create_parent(db).await?);
    let invitee = factory::create_user(db).await?;
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let result = service
        .issue(
            &other_parent,
            IssueInvitationParam {
                event_id: event.id,
                invitee_id: invitee.id,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let count = entity::prelude::Invitation::find().count(db).await?;
    assert_eq!(count, 0);
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests inviting the same user twice is rejected at the build step.
///
/// Expected: Err(Validation) with only the original invitation persisted
#[tokio::test]
async fn rejects_duplicate_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, invitee, event, _invitation) =
        factory::helpers::create_invitation_with_dependencies(db).await?;
    let owner = User::from_entity(owner);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let result = service
        .issue(
            &owner,
            IssueInvitationParam {
                event_id: event.id,
                invitee_id: invitee.id,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    let count = entity::prelude::Invitation::find().count(db).await?;
    assert_eq!(count, 1);
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests inviting a missing user.
///
/// Expected: Err(NotFound) with no side effects
#[tokio::test]
async fn rejects_unknown_invitee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let owner = User::from_entity(owner);
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let result = service
        .issue(
            &owner,
            IssueInvitationParam {
                event_id: event.id,
                invitee_id: 4242,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests inviting to a missing event.
///
/// Expected: Err(NotFound) with no side effects
#[tokio::test]
async fn rejects_unknown_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = User::from_entity(factory::create_parent(db).await?);
    let invitee = factory::create_user(db).await?;
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let result = service
        .issue(
            &parent,
            IssueInvitationParam {
                event_id: 4242,
                invitee_id: invitee.id,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests a persist failure skips the dispatch step.
///
/// The invitation table is deliberately missing, so the persist step fails
/// after authorize and build succeeded.
///
/// Expected: Err(DbErr) with no dispatch
#[tokio::test]
async fn persist_failure_skips_dispatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let owner = User::from_entity(owner);
    let invitee = factory::create_user(db).await?;
    let notifier = RecordingNotifier::new();

    let service = InvitationService::new(db, &notifier);
    let result = service
        .issue(
            &owner,
            IssueInvitationParam {
                event_id: event.id,
                invitee_id: invitee.id,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(notifier.calls().is_empty());

    Ok(())
}

/// Tests a notification failure does not fail the operation.
///
/// Expected: Ok with the invitation persisted despite the failed dispatch
#[tokio::test]
async fn succeeds_when_notification_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let owner = User::from_entity(owner);
    let invitee = factory::create_user(db).await?;
    let notifier = RecordingNotifier::failing();

    let service = InvitationService::new(db, &notifier);
    let invitation = service
        .issue(
            &owner,
            IssueInvitationParam {
                event_id: event.id,
                invitee_id: invitee.id,
            },
        )
        .await?;

    assert_eq!(
        notifier.calls(),
        vec![NotifierCall::InvitationIssued(invitation.id)]
    );

    let count = entity::prelude::Invitation::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
