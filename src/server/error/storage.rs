use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a stored file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A stored blob referenced by the database is missing on disk.
    #[error("{0} not found in storage")]
    NotFound(String),
}
