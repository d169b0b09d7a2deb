use super::*;

/// Tests the dashboard aggregation.
///
/// Verifies that resources are split by type, communications come newest first
/// and another user's records never appear.
///
/// Expected: Dashboard holding only the caller's records
#[tokio::test]
async fn aggregates_own_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::user::create_user(db).await?);
    let other = factory::user::create_user(db).await?;

    factory::calendar_event::create_event(db, user.id).await?;
    factory::calendar_event::create_event(db, other.id).await?;
    factory::resource::ResourceFactory::new(db, user.id)
        .resource_type("photo")
        .build()
        .await?;
    factory::resource::ResourceFactory::new(db, user.id)
        .resource_type("document")
        .build()
        .await?;
    let contact = factory::contact::create_contact(db, user.id).await?;
    factory::communication::CommunicationFactory::new(db, contact.id)
        .content("older")
        .timestamp(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::communication::CommunicationFactory::new(db, contact.id)
        .content("newer")
        .build()
        .await?;
    factory::helpers::create_communication_with_dependencies(db).await?;

    let dashboard = DashboardService::new(db).get(&user, None, false).await?;

    assert_eq!(dashboard.section, "welcome");
    assert_eq!(dashboard.welcome, None);
    assert_eq!(dashboard.calendar_events.len(), 1);
    assert_eq!(dashboard.photo_gallery.len(), 1);
    assert_eq!(dashboard.documents.len(), 1);
    assert_eq!(dashboard.contacts.len(), 1);
    let contents: Vec<_> = dashboard
        .communications
        .iter()
        .map(|c| c.content.as_deref())
        .collect();
    assert_eq!(contents, vec![Some("newer"), Some("older")]);

    Ok(())
}

/// Tests the first-visit greeting and a requested section.
///
/// Expected: Welcome message naming the user and the section echoed back
#[tokio::test]
async fn greets_on_first_visit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .username("susan")
        .build()
        .await?;
    let user = User::from_entity(entity);

    let dashboard = DashboardService::new(db)
        .get(&user, Some("contacts".to_string()), true)
        .await?;

    assert_eq!(dashboard.section, "contacts");
    assert_eq!(
        dashboard.welcome.as_deref(),
        Some("Welcome to your dashboard, susan!")
    );

    Ok(())
}
