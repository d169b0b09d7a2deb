use super::*;

/// Tests creating a photo resource with an image id.
///
/// Expected: Ok with the type stored in its lowercase form
#[tokio::test]
async fn creates_photo_with_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ResourceRepository::new(db);
    let resource = repo
        .create(
            user.id,
            ResourceParam {
                title: "Holiday".to_string(),
                description: None,
                resource_type: ResourceType::Photo,
            },
            Some("img-1".to_string()),
        )
        .await?;

    assert_eq!(resource.user_id, user.id);
    assert_eq!(resource.resource_type, ResourceType::Photo);
    assert_eq!(resource.image_id.as_deref(), Some("img-1"));

    let stored = entity::resource::Entity::find_by_id(resource.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.resource_type, "photo");

    Ok(())
}
