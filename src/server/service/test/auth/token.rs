use super::*;

/// Tests issuing a fresh token.
///
/// Expected: 32 hex characters that authenticate through check_token
#[tokio::test]
async fn issues_token_that_checks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::user::create_user(db).await?);
    let service = AuthService::new(db);

    let token = service.get_token(&user).await?;

    assert_eq!(token.len(), 32);
    let checked = service.check_token(&token).await?.unwrap();
    assert_eq!(checked.id, user.id);

    Ok(())
}

/// Tests that a token with plenty of time left is reused.
///
/// Expected: The existing token is returned unchanged
#[tokio::test]
async fn reuses_token_with_time_left() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::user::create_user_with_token(db, "existing").await?);

    let token = AuthService::new(db).get_token(&user).await?;

    assert_eq!(token, "existing");

    Ok(())
}

/// Tests that a token about to expire is replaced.
///
/// Expected: A new token different from the old one
#[tokio::test]
async fn replaces_nearly_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .token("expiring", Duration::seconds(30))
        .build()
        .await?;
    let user = User::from_entity(entity);
    let service = AuthService::new(db);

    let token = service.get_token(&user).await?;

    assert_ne!(token, "expiring");
    assert!(service.check_token("expiring").await?.is_none());

    Ok(())
}

/// Tests revoking a token.
///
/// Expected: The token no longer authenticates and its expiration is in the past
#[tokio::test]
async fn revoked_token_never_checks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::user::create_user_with_token(db, "revoke-me").await?);
    let service = AuthService::new(db);

    service.revoke_token(&user).await?;

    assert!(service.check_token("revoke-me").await?.is_none());
    let stored = crate::server::data::user::UserRepository::new(db)
        .find_by_id(user.id)
        .await?
        .unwrap();
    assert!(stored.token_expiration.unwrap() < Utc::now());

    Ok(())
}
