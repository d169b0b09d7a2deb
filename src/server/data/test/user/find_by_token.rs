use super::*;

/// Tests looking up a user by bearer token.
///
/// Expected: Ok(Some) for the holder of the token, Ok(None) for an unknown token
#[tokio::test]
async fn finds_user_holding_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_token(db, "abc123").await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_token("abc123").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    assert!(repo.find_by_token("missing").await?.is_none());

    Ok(())
}

/// Tests that expiration changes keep the token in place.
///
/// Revocation only moves the expiration, so the lookup still finds the user and
/// the caller is responsible for rejecting it.
///
/// Expected: Ok(Some) with the updated expiration
#[tokio::test]
async fn token_survives_expiration_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_token(db, "abc123").await?;

    let repo = UserRepository::new(db);
    let revoked_at = Utc::now() - Duration::seconds(1);
    repo.set_token_expiration(user.id, revoked_at).await?;

    let found = repo.find_by_token("abc123").await?.unwrap();
    assert!(found.token_expiration.unwrap() < Utc::now());

    Ok(())
}
