//! File storage for attachment uploads and resource images.
//!
//! Both stores are plain directories. Attachments are written under a
//! non-guessable `{uuid}_{sanitized name}` and the resulting path is recorded on
//! the attachment row. Images are opaque blobs named by a uuid, and only that id
//! is recorded on the resource row.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::server::{error::storage::StorageError, util::file::secure_filename};

/// Location of a file written to the [`UploadStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredUpload {
    /// Non-guessable `{uuid}_{sanitized name}` file name.
    pub filename: String,
    /// Full path of the stored file.
    pub filepath: String,
}

/// Directory holding uploaded communication attachments.
#[derive(Clone, Debug)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Opens the store, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        Ok(Self { root })
    }

    /// Writes an uploaded file under a new non-guessable name.
    ///
    /// # Arguments
    /// - `original_name` - Client supplied file name, sanitized before use
    /// - `data` - File contents
    ///
    /// # Returns
    /// - `Ok(StoredUpload)` - Stored name and path, to be recorded on the attachment
    /// - `Err(StorageError::Io(_))` - Write failed
    pub async fn save(
        &self,
        original_name: &str,
        data: &[u8],
    ) -> Result<StoredUpload, StorageError> {
        let filename = format!("{}_{}", Uuid::new_v4(), secure_filename(original_name));
        let path = self.root.join(&filename);

        tokio::fs::write(&path, data).await?;
        tracing::debug!("Stored upload at {}", path.display());

        Ok(StoredUpload {
            filename,
            filepath: path.to_string_lossy().into_owned(),
        })
    }

    /// Reads a stored file back.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - File contents
    /// - `Err(StorageError::NotFound(_))` - The recorded file is gone
    /// - `Err(StorageError::Io(_))` - Read failed
    pub async fn read(&self, filepath: &str) -> Result<Vec<u8>, StorageError> {
        read_or_not_found(Path::new(filepath), "Attachment file").await
    }

    /// Removes a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, filepath: &str) -> Result<(), StorageError> {
        remove_if_exists(Path::new(filepath)).await
    }

    /// Removes every file in `filepaths`, logging failures instead of returning them.
    pub async fn remove_all(&self, filepaths: &[String]) {
        for filepath in filepaths {
            if let Err(e) = self.remove(filepath).await {
                tracing::warn!("Failed to remove attachment file {}: {}", filepath, e);
            }
        }
    }
}

/// Directory holding resource images addressed by opaque id.
#[derive(Clone, Debug)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Opens the store, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        Ok(Self { root })
    }

    /// Stores an image and returns its new id.
    pub async fn save(&self, data: &[u8]) -> Result<String, StorageError> {
        let id = Uuid::new_v4().to_string();
        tokio::fs::write(self.root.join(&id), data).await?;

        Ok(id)
    }

    /// Loads an image by id.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Image bytes
    /// - `Err(StorageError::NotFound(_))` - Unknown or malformed id
    pub async fn load(&self, id: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(id)?;
        read_or_not_found(&path, "Image").await
    }

    /// Removes an image by id. A missing image is not an error.
    pub async fn remove(&self, id: &str) -> Result<(), StorageError> {
        let path = self.path_for(id)?;
        remove_if_exists(&path).await
    }

    // Ids are always uuids, which also keeps them a single path component.
    fn path_for(&self, id: &str) -> Result<PathBuf, StorageError> {
        let id = Uuid::parse_str(id).map_err(|_| StorageError::NotFound("Image".to_string()))?;

        Ok(self.root.join(id.to_string()))
    }
}

async fn read_or_not_found(path: &Path, what: &str) -> Result<Vec<u8>, StorageError> {
    match tokio::fs::read(path).await {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound(what.to_string())),
        Err(e) => Err(e.into()),
    }
}

async fn remove_if_exists(path: &Path) -> Result<(), StorageError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
