use super::*;

/// Tests recording an uploaded file against a communication.
///
/// Expected: Ok with the stored metadata and path
#[tokio::test]
async fn creates_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, communication) =
        factory::helpers::create_communication_with_dependencies(db).await?;

    let repo = AttachmentRepository::new(db);
    let attachment = repo
        .create(CreateAttachmentParam {
            communication_id: communication.id,
            filename: "minutes.pdf".to_string(),
            filetype: "application/pdf".to_string(),
            filepath: "uploads/abc_minutes.pdf".to_string(),
        })
        .await?;

    assert!(attachment.id > 0);
    assert_eq!(attachment.communication_id, communication.id);
    assert_eq!(attachment.filename, "minutes.pdf");
    assert_eq!(attachment.filepath, "uploads/abc_minutes.pdf");

    Ok(())
}
