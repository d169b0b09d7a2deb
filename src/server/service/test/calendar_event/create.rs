use super::*;

/// Tests creating the standup event from a request body.
///
/// Expected: Ok with matching fields and a generated id
#[tokio::test]
async fn creates_event_from_body() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let data = body(json!({
        "title": "Standup",
        "start_time": "2024-01-01T09:00:00Z",
        "end_time": "2024-01-01T09:15:00Z",
        "user_id": 12345
    }));

    let event = CalendarEventService::new(db).create(user.id, &data).await?;

    assert!(event.id > 0);
    assert_eq!(event.user_id, user.id);
    assert_eq!(event.title, "Standup");
    assert_eq!(event.start_time.to_rfc3339(), "2024-01-01T09:00:00+00:00");
    assert!(!event.is_recurring);

    Ok(())
}

/// Tests that title, start and end are required.
///
/// Expected: Err(BadRequest "Missing required fields")
#[tokio::test]
async fn requires_core_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = CalendarEventService::new(db)
        .create(user.id, &body(json!({ "title": "No times" })))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Missing required fields"));

    Ok(())
}

/// Tests that an event may not end before it starts.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let data = body(json!({
        "title": "Backwards",
        "start_time": "2024-01-01T10:00:00Z",
        "end_time": "2024-01-01T09:00:00Z"
    }));

    let result = CalendarEventService::new(db).create(user.id, &data).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
