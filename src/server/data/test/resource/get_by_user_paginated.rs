use super::*;

/// Tests filtering resources by type.
///
/// Expected: Ok with only matching resources and a total counting only those
#[tokio::test]
async fn filters_by_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::resource::ResourceFactory::new(db, user.id)
        .resource_type("photo")
        .build()
        .await?;
    factory::resource::ResourceFactory::new(db, user.id)
        .resource_type("document")
        .build()
        .await?;
    factory::resource::ResourceFactory::new(db, user.id)
        .resource_type("photo")
        .build()
        .await?;

    let repo = ResourceRepository::new(db);

    let (photos, total) = repo
        .get_by_user_paginated(user.id, Some(ResourceType::Photo), 0, 10)
        .await?;
    assert_eq!(total, 2);
    assert!(photos
        .iter()
        .all(|r| r.resource_type == ResourceType::Photo));

    let (all, total) = repo.get_by_user_paginated(user.id, None, 0, 10).await?;
    assert_eq!(total, 3);
    assert_eq!(all.len(), 3);

    let documents = repo
        .get_all_by_user_and_type(user.id, ResourceType::Document)
        .await?;
    assert_eq!(documents.len(), 1);

    Ok(())
}
