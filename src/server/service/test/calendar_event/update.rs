use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided allow-listed fields change and that ids in
/// the body are ignored.
///
/// Expected: Ok with the new title and every other field unchanged
#[tokio::test]
async fn merges_present_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let event = factory::calendar_event::CalendarEventFactory::new(db, user.id)
        .description("Keep me")
        .build()
        .await?;

    let updated = CalendarEventService::new(db)
        .update(
            event.id,
            user.id,
            &body(json!({ "title": "Renamed", "id": 999, "user_id": 999 })),
        )
        .await?;

    assert_eq!(updated.id, event.id);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description.as_deref(), Some("Keep me"));
    assert_eq!(updated.start_time, event.start_time);

    Ok(())
}

/// Tests a field of the wrong JSON type.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_mistyped_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let event = factory::calendar_event::create_event(db, user.id).await?;

    let result = CalendarEventService::new(db)
        .update(event.id, user.id, &body(json!({ "is_recurring": "yes" })))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
