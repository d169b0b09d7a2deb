//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation for test data and convenience methods that create
//! an entity together with the owner chain it depends on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a communication together with the user and contact that own it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, contact, communication))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_communication_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::contact::Model,
        entity::communication::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (contact, communication) = create_communication_for_user(db, &user).await?;

    Ok((user, contact, communication))
}

/// Creates a contact owned by `user` and a communication with that contact.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - Owner of the new contact
///
/// # Returns
/// - `Ok((contact, communication))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_communication_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<(entity::contact::Model, entity::communication::Model), DbErr> {
    let contact = crate::factory::contact::create_contact(db, user.id).await?;
    let communication =
        crate::factory::communication::create_communication(db, contact.id).await?;

    Ok((contact, communication))
}
