use crate::error::Result;
use crate::storage::utils::error::presence;
use crate::storage::utils::path::{
    container_path, is_valid_container_name, is_valid_object_key, object_path,
};
use opendal::Operator;

/// Trait for answering "does this exist?" questions about storage.
pub trait Checker {
    /// Check whether a container (top-level directory) exists.
    ///
    /// Returns `Ok(false)` when the backend reports the path as not found and
    /// for names that cannot be a container; any other failure is an error.
    async fn container_exists(&self, name: &str) -> Result<bool>;

    /// Check whether an object exists inside a container.
    async fn object_exists(&self, container: &str, key: &str) -> Result<bool>;
}

/// Implementation of Checker for OpenDAL Operator.
pub struct OpenDalChecker {
    operator: Operator,
}

impl OpenDalChecker {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Checker for OpenDalChecker {
    async fn container_exists(&self, name: &str) -> Result<bool> {
        if !is_valid_container_name(name) {
            return Ok(false);
        }
        let path = container_path(name);
        presence(&path, self.operator.stat(&path).await)
    }

    async fn object_exists(&self, container: &str, key: &str) -> Result<bool> {
        if !is_valid_container_name(container) || !is_valid_object_key(key) {
            return Ok(false);
        }
        let path = object_path(container, key);
        match self.operator.stat(&path).await {
            // A directory marker is not an object
            Ok(meta) if meta.mode().is_dir() => Ok(false),
            other => presence(&path, other),
        }
    }
}
