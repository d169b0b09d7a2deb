use super::*;

/// Tests that listing is scoped and ordered by start time.
///
/// Expected: Ok with only the owner's events, earliest first, and the owner's total
#[tokio::test]
async fn lists_own_events_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    factory::calendar_event::CalendarEventFactory::new(db, user.id)
        .title("Late")
        .starts_at(base + Duration::hours(5))
        .build()
        .await?;
    factory::calendar_event::CalendarEventFactory::new(db, user.id)
        .title("Early")
        .starts_at(base)
        .build()
        .await?;
    factory::calendar_event::CalendarEventFactory::new(db, user.id)
        .title("Middle")
        .starts_at(base + Duration::hours(2))
        .build()
        .await?;
    factory::calendar_event::create_event(db, other.id).await?;

    let repo = CalendarEventRepository::new(db);
    let (events, total) = repo.get_by_user_paginated(user.id, 0, 2).await?;

    assert_eq!(total, 3);
    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Early", "Middle"]);

    let (events, _) = repo.get_by_user_paginated(user.id, 1, 2).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Late");

    Ok(())
}

/// Tests a page past the end.
///
/// Expected: Ok with no events but the real total
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::calendar_event::create_event(db, user.id).await?;

    let repo = CalendarEventRepository::new(db);
    let (events, total) = repo.get_by_user_paginated(user.id, 4, 10).await?;

    assert!(events.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests page numbers whose row offset does not fit the database's integer range.
///
/// Expected: Ok with no events and the real total, without issuing the page query
#[tokio::test]
async fn huge_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::calendar_event::create_event(db, user.id).await?;

    let repo = CalendarEventRepository::new(db);
    let (events, total) = repo
        .get_by_user_paginated(user.id, 100_000_000_000_000_000, 100)
        .await?;
    assert!(events.is_empty());
    assert_eq!(total, 1);

    let (events, total) = repo
        .get_by_user_paginated(user.id, i64::MAX as u64 - 1, 100)
        .await?;
    assert!(events.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
