use super::*;

/// Tests listing contacts ordered by name.
///
/// Expected: Ok with the owner's contacts sorted alphabetically
#[tokio::test]
async fn lists_contacts_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    for name in ["Zoe", "Alice", "Bob"] {
        factory::contact::ContactFactory::new(db, user.id)
            .name(name)
            .build()
            .await?;
    }
    factory::contact::create_contact(db, other.id).await?;

    let repo = ContactRepository::new(db);
    let (contacts, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;

    assert_eq!(total, 3);
    let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Zoe"]);

    Ok(())
}
