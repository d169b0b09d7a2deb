use super::*;

/// Tests deleting a communication with attachments.
///
/// Expected: Ok with the attachment paths, the contact is kept
#[tokio::test]
async fn deletes_communication_and_attachments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, contact, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;
    factory::attachment::AttachmentFactory::new(db, communication.id)
        .filepath("uploads/one.pdf")
        .build()
        .await?;
    factory::attachment::AttachmentFactory::new(db, communication.id)
        .filepath("uploads/two.pdf")
        .build()
        .await?;

    let repo = CommunicationRepository::new(db);
    let mut filepaths = repo.delete(communication.id).await?;
    filepaths.sort();

    assert_eq!(filepaths, vec!["uploads/one.pdf", "uploads/two.pdf"]);
    assert!(repo
        .get_by_id_for_user(communication.id, user.id)
        .await?
        .is_none());
    assert!(entity::prelude::Attachment::find().all(db).await?.is_empty());
    assert!(entity::prelude::Contact::find_by_id(contact.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
