use super::*;

/// Tests fetching a communication through its contact's owner.
///
/// Expected: Ok(Some) carrying the contact's name
#[tokio::test]
async fn returns_communication_with_contact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, contact, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;

    let repo = CommunicationRepository::new(db);
    let found = repo
        .get_by_id_for_user(communication.id, user.id)
        .await?
        .unwrap();

    assert_eq!(found.id, communication.id);
    assert_eq!(found.contact_id, contact.id);
    assert_eq!(found.contact_name, contact.name);

    Ok(())
}

/// Tests that a communication logged against another user's contact is hidden.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_communication_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let repo = CommunicationRepository::new(db);

    assert!(repo
        .get_by_id_for_user(communication.id, intruder.id)
        .await?
        .is_none());
    assert!(repo
        .get_with_attachments_for_user(communication.id, intruder.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests loading a communication with its attachments.
///
/// Expected: Ok(Some) listing every attachment in insertion order
#[tokio::test]
async fn loads_attachments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;
    factory::attachment::AttachmentFactory::new(db, communication.id)
        .filename("first.pdf")
        .build()
        .await?;
    factory::attachment::AttachmentFactory::new(db, communication.id)
        .filename("second.png")
        .build()
        .await?;

    let repo = CommunicationRepository::new(db);
    let detail = repo
        .get_with_attachments_for_user(communication.id, user.id)
        .await?
        .unwrap();

    let names: Vec<_> = detail
        .attachments
        .iter()
        .map(|a| a.filename.as_str())
        .collect();
    assert_eq!(names, vec!["first.pdf", "second.png"]);

    Ok(())
}
