use super::*;

/// Tests logging in with the registered password.
///
/// Expected: Ok(User) for the right password, InvalidCredentials otherwise
#[tokio::test]
async fn checks_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service
        .register(register_param("susan", "susan@example.com"))
        .await?;

    let user = service.login("susan", "correct horse").await?;
    assert_eq!(user.id, registered.id);

    let wrong = service.login("susan", "wrong").await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that an unknown username fails like a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).login("nobody", "pw").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
