use sea_orm::DatabaseConnection;
use time::Duration;
use tokio::task::JoinHandle;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    mail::{LogTransport, MailService},
    storage::{ImageStore, UploadStore},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is current before the
/// first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same Sqlite database as the application data and expire
/// after seven days without activity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the router with
/// - `Err(AppError::SqlxErr(_))` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Opens the upload and image directories, creating them if missing.
pub async fn open_storage(config: &Config) -> Result<(UploadStore, ImageStore), AppError> {
    let uploads = UploadStore::open(&config.upload_folder).await?;
    let images = ImageStore::open(&config.image_folder).await?;

    Ok((uploads, images))
}

/// Starts the mail worker.
///
/// No SMTP transport is configured, so messages are written to the log.
pub fn start_mail_worker(config: &Config) -> (MailService, JoinHandle<()>) {
    MailService::start(LogTransport, config.mail_queue_size)
}
