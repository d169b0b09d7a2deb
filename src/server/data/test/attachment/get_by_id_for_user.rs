use super::*;

/// Tests that attachment ownership follows communication and contact.
///
/// Expected: Ok(Some) for the contact's owner, Ok(None) for anyone else
#[tokio::test]
async fn scopes_attachment_through_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;
    let attachment = factory::attachment::create_attachment(db, communication.id).await?;
    let other = factory::user::create_user(db).await?;

    let repo = AttachmentRepository::new(db);

    let found = repo.get_by_id_for_user(attachment.id, owner.id).await?;
    assert_eq!(found.map(|a| a.id), Some(attachment.id));
    assert!(repo
        .get_by_id_for_user(attachment.id, other.id)
        .await?
        .is_none());

    Ok(())
}
