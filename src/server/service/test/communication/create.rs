use super::*;

/// Tests logging a communication with an owned contact.
///
/// Expected: Ok carrying the contact's name and a timestamp
#[tokio::test]
async fn logs_communication_with_own_contact() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let contact = factory::contact::create_contact(db, user.id).await?;
    let data = body(json!({
        "contact_id": contact.id,
        "message_type": "call",
        "content": "Discussed the roadmap"
    }));

    let communication = CommunicationService::new(db).create(user.id, &data).await?;

    assert_eq!(communication.contact_id, contact.id);
    assert_eq!(communication.contact_name, contact.name);
    assert_eq!(communication.message_type, "call");

    let page = CommunicationService::new(db)
        .get_paginated(user.id, PageRequest::default())
        .await?;
    assert_eq!(page.total_items, 1);

    Ok(())
}

/// Tests that communications cannot be logged against another user's contact.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_foreign_contact() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let contact = factory::contact::create_contact(db, owner.id).await?;

    let result = CommunicationService::new(db)
        .create(
            intruder.id,
            &body(json!({ "contact_id": contact.id, "message_type": "email" })),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a non-numeric contact id.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_mistyped_contact_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = CommunicationService::new(db)
        .create(
            user.id,
            &body(json!({ "contact_id": "one", "message_type": "email" })),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
