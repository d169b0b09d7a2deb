//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for
//! persistence. Every record belongs to a user, and every read or write is
//! scoped to the authenticated principal.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, authentication, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Owner-scoped database queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, field allow-lists, and pagination
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, config, mail queue, file stores)
//! - **Startup** (`startup`) - Database, session, storage, and mail worker initialization
//! - **Router** (`router`) - Route table and OpenAPI document
//! - **Mail** (`mail`) - Outbound email queue drained by a background worker
//! - **Storage** (`storage`) - Attachment and image files on disk
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** resolves the principal through `AuthGuard`, decodes the body
//! 3. **Service** validates input and applies ownership rules
//! 4. **Data** queries the database filtered by owner
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mail;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
pub mod util;
