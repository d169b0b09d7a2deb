use super::*;

/// Tests creating a contact.
///
/// Expected: Ok owned by the caller regardless of any user_id in the body
#[tokio::test]
async fn creates_contact_for_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let data = body(json!({
        "name": "Ada",
        "organization": "Engines Ltd",
        "user_id": user.id + 1
    }));

    let contact = ContactService::new(db).create(user.id, &data).await?;

    assert_eq!(contact.user_id, user.id);
    assert_eq!(contact.name, "Ada");
    assert_eq!(contact.organization.as_deref(), Some("Engines Ltd"));
    assert_eq!(contact.phone_number, None);

    Ok(())
}

/// Tests that a contact needs a name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = ContactService::new(db);

    let missing = service.create(user.id, &body(json!({ "email": "a@b.c" }))).await;
    let blank = service.create(user.id, &body(json!({ "name": "  " }))).await;

    assert!(matches!(missing, Err(AppError::BadRequest(_))));
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    Ok(())
}
