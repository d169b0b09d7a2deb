use super::*;

/// Tests updating allow-listed contact fields.
///
/// Expected: Ok with the new values, owner and unlisted fields unchanged
#[tokio::test]
async fn updates_allow_listed_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let contact = factory::contact::ContactFactory::new(db, user.id)
        .name("Ada")
        .department("R&D")
        .build()
        .await?;

    let updated = ContactService::new(db)
        .update(
            contact.id,
            user.id,
            &body(json!({
                "organization": "Engines Ltd",
                "phone_number": "555-0100",
                "user_id": user.id + 1,
                "id": contact.id + 1
            })),
        )
        .await?;

    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.department.as_deref(), Some("R&D"));
    assert_eq!(updated.organization.as_deref(), Some("Engines Ltd"));
    assert_eq!(updated.phone_number.as_deref(), Some("555-0100"));

    Ok(())
}

/// Tests updating another user's contact.
///
/// Expected: Err(NotFound) and the contact left unchanged
#[tokio::test]
async fn foreign_contact_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let contact = factory::contact::ContactFactory::new(db, owner.id)
        .name("Ada")
        .build()
        .await?;

    let service = ContactService::new(db);
    let result = service
        .update(contact.id, intruder.id, &body(json!({ "name": "Mine" })))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let untouched = service.get(contact.id, owner.id).await?;
    assert_eq!(untouched.name, "Ada");
    assert_eq!(untouched.user_id, owner.id);

    Ok(())
}
