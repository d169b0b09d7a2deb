use super::*;

/// Tests that another user's event cannot be read, changed or deleted.
///
/// Expected: NotFound for every operation and the event left intact
#[tokio::test]
async fn foreign_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let event = factory::calendar_event::create_event(db, owner.id).await?;

    let service = CalendarEventService::new(db);

    assert!(matches!(
        service.get(event.id, intruder.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .update(event.id, intruder.id, &body(json!({ "title": "Mine" })))
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(event.id, intruder.id).await,
        Err(AppError::NotFound(_))
    ));

    let untouched = service.get(event.id, owner.id).await?;
    assert_eq!(untouched.title, event.title);

    let page = service
        .get_paginated(intruder.id, PageRequest::default())
        .await?;
    assert_eq!(page.total_items, 0);

    Ok(())
}
