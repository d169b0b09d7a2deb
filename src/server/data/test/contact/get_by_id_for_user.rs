use super::*;

/// Tests that contacts are only visible to their owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for another user
#[tokio::test]
async fn scopes_contact_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let contact = factory::contact::create_contact(db, owner.id).await?;

    let repo = ContactRepository::new(db);

    assert!(repo.get_by_id_for_user(contact.id, owner.id).await?.is_some());
    assert!(repo.get_by_id_for_user(contact.id, other.id).await?.is_none());

    Ok(())
}
