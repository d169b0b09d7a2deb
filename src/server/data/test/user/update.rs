use super::*;
use crate::server::model::user::UserParam;

/// Tests updating profile fields.
///
/// Verifies that only the profile columns change and the password hash and
/// token are left alone.
///
/// Expected: Ok with updated username and about_me
#[tokio::test]
async fn updates_profile_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password_hash("keep-me")
        .token("tok", Duration::hours(1))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UserParam {
                username: "renamed".to_string(),
                email: user.email.clone(),
                about_me: Some("Hello".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.about_me.as_deref(), Some("Hello"));
    assert_eq!(updated.password_hash, "keep-me");
    assert_eq!(updated.token.as_deref(), Some("tok"));

    Ok(())
}

/// Tests recording activity.
///
/// Expected: Ok with last_seen moved to the given time
#[tokio::test]
async fn updates_last_seen() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let seen = Utc::now() + Duration::minutes(5);

    let repo = UserRepository::new(db);
    repo.update_last_seen(user.id, seen).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    let last_seen = reloaded.last_seen.unwrap();
    assert!((last_seen - seen).num_milliseconds().abs() < 1);

    Ok(())
}
