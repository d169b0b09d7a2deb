use super::*;

/// Tests updating an event.
///
/// Expected: Ok with new field values, unchanged owner and creation time
#[tokio::test]
async fn updates_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let event = factory::calendar_event::create_event(db, user.id).await?;

    let repo = CalendarEventRepository::new(db);
    let updated = repo
        .update(
            event.id,
            CalendarEventParam {
                title: "Renamed".to_string(),
                description: Some("Moved".to_string()),
                start_time: event.start_time,
                end_time: event.end_time + Duration::minutes(30),
                is_recurring: false,
                recurrence_pattern: None,
            },
        )
        .await?;

    assert_eq!(updated.id, event.id);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description.as_deref(), Some("Moved"));
    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}
