use super::*;

/// Tests downloading an uploaded attachment.
///
/// Expected: The uploaded bytes for the owner, NotFound for anyone else
#[tokio::test]
async fn returns_bytes_to_owner_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = Config::for_tests(dir.path());
    let uploads = UploadStore::open(&config.upload_folder).await?;

    let (user, _, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let service = AttachmentService::new(db, &uploads);
    let attachment = service
        .upload(
            user.id,
            communication.id,
            file("notes.txt", "text/plain"),
            &config.allowed_extensions,
        )
        .await?;

    let (downloaded, data) = service.download(attachment.id, user.id).await?;
    assert_eq!(downloaded.id, attachment.id);
    assert_eq!(data, b"contents");

    assert!(matches!(
        service.download(attachment.id, intruder.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
