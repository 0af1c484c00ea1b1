use super::*;


/// Tests authentication without role permissions.
///
/// Verifies that a regular authenticated user passes a guard with an empty
/// permission slice.
///
/// Expected: Ok(User) for any authenticated user
#[tokio::test]
async fn authenticates_without_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create regular user
    let user = factory::user::UserFactory::new(db)
        .name("RegularUser")
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Require authentication only
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.name, "RegularUser");

    Ok(())
}
