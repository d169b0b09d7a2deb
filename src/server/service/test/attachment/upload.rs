use super::*;

/// Tests uploading an allowed file.
///
/// Expected: Ok with a uuid-prefixed stored name and the file on disk
#[tokio::test]
async fn stores_allowed_file() -> Result<(), AppError> {
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

    let attachment = AttachmentService::new(db, &uploads)
        .upload(
            user.id,
            communication.id,
            file("report.pdf", "application/pdf"),
            &config.allowed_extensions,
        )
        .await?;

    assert_eq!(attachment.communication_id, communication.id);
    assert_eq!(attachment.filetype, "application/pdf");
    assert!(attachment.filename.ends_with("_report.pdf"));
    assert_ne!(attachment.filename, "report.pdf");
    assert!(std::path::Path::new(&attachment.filepath).exists());

    Ok(())
}

/// Tests uploading an executable.
///
/// Expected: Err(BadRequest "Invalid file type") and nothing stored
#[tokio::test]
async fn rejects_disallowed_extension() -> Result<(), AppError> {
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

    let result = AttachmentService::new(db, &uploads)
        .upload(
            user.id,
            communication.id,
            file("virus.exe", "application/octet-stream"),
            &config.allowed_extensions,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid file type"));
    assert_eq!(std::fs::read_dir(&config.upload_folder).unwrap().count(), 0);

    Ok(())
}

/// Tests uploading to another user's communication.
///
/// Expected: Err(NotFound "Invalid communication ID")
#[tokio::test]
async fn rejects_foreign_communication() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = Config::for_tests(dir.path());
    let uploads = UploadStore::open(&config.upload_folder).await?;

    let (_, _, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let result = AttachmentService::new(db, &uploads)
        .upload(
            intruder.id,
            communication.id,
            file("report.pdf", "application/pdf"),
            &config.allowed_extensions,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Invalid communication ID"));

    Ok(())
}
