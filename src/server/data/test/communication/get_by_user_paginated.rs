use super::*;

/// Tests listing communications newest first.
///
/// Verifies that communications across all of the user's contacts are returned
/// and that another user's communications are excluded from items and total.
///
/// Expected: Ok with the user's communications ordered by descending timestamp
#[tokio::test]
async fn lists_newest_first_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::contact::create_contact(db, user.id).await?;
    let second = factory::contact::create_contact(db, user.id).await?;
    let now = Utc::now();

    factory::communication::CommunicationFactory::new(db, first.id)
        .content("old")
        .timestamp(now - Duration::days(2))
        .build()
        .await?;
    factory::communication::CommunicationFactory::new(db, second.id)
        .content("new")
        .timestamp(now)
        .build()
        .await?;
    factory::communication::CommunicationFactory::new(db, first.id)
        .content("middle")
        .timestamp(now - Duration::days(1))
        .build()
        .await?;
    factory::helpers::create_communication_with_dependencies(db).await?;

    let repo = CommunicationRepository::new(db);
    let (communications, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;

    assert_eq!(total, 3);
    let contents: Vec<_> = communications
        .iter()
        .map(|c| c.content.as_deref())
        .collect();
    assert_eq!(contents, vec![Some("new"), Some("middle"), Some("old")]);

    let recent = repo.get_recent_by_user(user.id, 2).await?;
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].content.as_deref(), Some("new"));

    Ok(())
}
