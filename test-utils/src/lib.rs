//! Dashboard Test Utils
//!
//! Shared testing utilities for the dashboard backend. Provides a builder for
//! in-memory SQLite test contexts and factories that insert entities with sensible
//! defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_events() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::user::create_user(db).await?;
//!     let event = factory::calendar_event::create_event(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
