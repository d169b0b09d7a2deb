use super::*;

/// Tests creating a photo with an image.
///
/// Expected: The image is stored and returned when the resource is read
#[tokio::test]
async fn stores_and_returns_image() -> Result<(), AppError> {
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

    let resource = service
        .create(user.id, photo("Beach"), Some(vec![0xFF, 0xD8, 0xFF]))
        .await?;
    assert!(resource.image_id.is_some());

    let loaded = service.get(resource.id, user.id).await?;
    assert_eq!(loaded.image, Some(vec![0xFF, 0xD8, 0xFF]));

    let dto = loaded.into_dto();
    assert_eq!(dto.image.as_deref(), Some("/9j/"));

    Ok(())
}

/// Tests filtering the listing by type.
///
/// Expected: Only documents when filtering for documents
#[tokio::test]
async fn lists_by_type() -> Result<(), AppError> {
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
    service.create(user.id, photo("Beach"), None).await?;
    service
        .create(
            user.id,
            ResourceParam {
                resource_type: ResourceType::Document,
                ..photo("Contract")
            },
            None,
        )
        .await?;

    let page = service
        .get_paginated(user.id, Some(ResourceType::Document), PageRequest::default())
        .await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].title, "Contract");

    Ok(())
}

/// Tests that a resource whose image vanished from the store still loads.
///
/// Expected: Ok with no image
#[tokio::test]
async fn tolerates_missing_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::open(dir.path()).await?;

    let user = factory::user::create_user(db).await?;
    let resource = factory::resource::ResourceFactory::new(db, user.id)
        .image_id(uuid::Uuid::new_v4().to_string())
        .build()
        .await?;

    let loaded = ResourceService::new(db, &images)
        .get(resource.id, user.id)
        .await?;

    assert_eq!(loaded.image, None);

    Ok(())
}
