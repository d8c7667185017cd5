// Delete operation trait and implementation
use crate::error::{ContainerNotEmptySnafu, InvalidContainerNameSnafu, Result};
use crate::storage::utils::path::{container_path, is_valid_container_name};
use futures::stream::TryStreamExt;
use opendal::Operator;
use snafu::ensure;

/// Trait for deleting objects and containers from storage.
pub trait Deleter {
    /// Delete a single object.
    async fn delete_object(&self, remote_path: &str) -> Result<()>;

    /// Delete an empty container.
    ///
    /// Fails with [`crate::error::Error::ContainerNotEmpty`] if anything is
    /// still stored under it; the container is left untouched in that case.
    async fn delete_container(&self, name: &str) -> Result<()>;
}

/// Implementation of Deleter for OpenDAL Operator.
pub struct OpenDalDeleter {
    operator: Operator,
}

impl OpenDalDeleter {
    /// Create a new deleter with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Whether anything other than the directory marker lives under `path`.
    async fn has_children(&self, path: &str) -> Result<bool> {
        let mut lister = self.operator.lister(path).await?;
        while let Some(entry) = lister.try_next().await? {
            if entry.path().trim_start_matches('/') != path {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Deleter for OpenDalDeleter {
    async fn delete_object(&self, remote_path: &str) -> Result<()> {
        self.operator.delete(remote_path).await?;
        Ok(())
    }

    async fn delete_container(&self, name: &str) -> Result<()> {
        ensure!(
            is_valid_container_name(name),
            InvalidContainerNameSnafu {
                name: name.to_string()
            }
        );
        let path = container_path(name);
        ensure!(
            !self.has_children(&path).await?,
            ContainerNotEmptySnafu {
                name: name.to_string()
            }
        );
        self.operator.delete(&path).await?;
        Ok(())
    }
}
