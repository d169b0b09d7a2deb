use super::*;

/// Tests paging through users.
///
/// Expected: Page with the requested slice and the total across all pages
#[tokio::test]
async fn pages_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::user::create_user(db).await?;
    }

    let page = UserService::new(db)
        .get_paginated(PageRequest::new(Some(2), Some(2))?)
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages(), 2);
    assert!(!page.has_next());
    assert!(page.has_prev());

    Ok(())
}
