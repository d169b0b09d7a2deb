use super::*;

/// Tests that deleting a contact removes its attachment files.
///
/// Expected: Ok, the stored file is gone and the contact is NotFound
#[tokio::test]
async fn removes_attachment_files() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let uploads = UploadStore::open(dir.path()).await?;

    let (user, contact, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;
    let stored = uploads.save("notes.txt", b"minutes").await?;
    factory::attachment::AttachmentFactory::new(db, communication.id)
        .filepath(stored.filepath.clone())
        .build()
        .await?;

    let service = ContactService::new(db);
    service.delete(contact.id, user.id, &uploads).await?;

    assert!(!std::path::Path::new(&stored.filepath).exists());
    assert!(matches!(
        service.get(contact.id, user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that another user cannot delete a contact.
///
/// Expected: Err(NotFound) and the contact still exists
#[tokio::test]
async fn foreign_contact_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let uploads = UploadStore::open(dir.path()).await?;

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let contact = factory::contact::create_contact(db, owner.id).await?;

    let service = ContactService::new(db);

    assert!(matches!(
        service.delete(contact.id, intruder.id, &uploads).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.get(contact.id, owner.id).await.is_ok());

    Ok(())
}
