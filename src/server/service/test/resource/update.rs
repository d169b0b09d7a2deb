use super::*;

/// Tests updating the type of a resource.
///
/// Expected: Ok with the new type and the image id untouched
#[tokio::test]
async fn updates_allow_listed_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::open(dir.path()).await?;

    let user = factory::user::create_user(db).await?;
    let service = ResourceService::new(db, &images);
    let resource = service.create(user.id, photo("Scan"), Some(vec![1])).await?;

    let updated = service
        .update(
            resource.id,
            user.id,
            &body(json!({ "resource_type": "document", "image_id": "other" })),
        )
        .await?;

    assert_eq!(updated.resource_type, ResourceType::Document);
    assert_eq!(updated.image_id, resource.image_id);

    Ok(())
}

/// Tests an unknown resource type.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::open(dir.path()).await?;

    let user = factory::user::create_user(db).await?;
    let resource = factory::resource::create_resource(db, user.id).await?;

    let result = ResourceService::new(db, &images)
        .update(resource.id, user.id, &body(json!({ "resource_type": "video" })))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating another user's resource.
///
/// Expected: Err(NotFound) and the resource left unchanged
#[tokio::test]
async fn foreign_resource_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::open(dir.path()).await?;

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let service = ResourceService::new(db, &images);
    let resource = service.create(owner.id, photo("Scan"), None).await?;

    let result = service
        .update(
            resource.id,
            intruder.id,
            &body(json!({ "title": "Mine", "resource_type": "document" })),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let untouched = service.get(resource.id, owner.id).await?.resource;
    assert_eq!(untouched.title, "Scan");
    assert_eq!(untouched.resource_type, ResourceType::Photo);
    assert_eq!(untouched.user_id, owner.id);

    Ok(())
}
