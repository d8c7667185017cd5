use crate::error::{InvalidContainerNameSnafu, Result};
use crate::storage::utils::path::{container_path, is_valid_container_name, relative_key};
use futures::stream::TryStreamExt;
use opendal::Operator;
use snafu::ensure;

/// Trait for listing containers and their contents.
pub trait Lister {
    /// Names of every container under the storage root.
    async fn list_containers(&self) -> Result<Vec<String>>;

    /// Keys of every object in a container, relative to the container.
    ///
    /// Nested keys are included; directory markers are not.
    async fn list_objects(&self, container: &str) -> Result<Vec<String>>;
}

/// Implementation of Lister for OpenDAL Operator.
pub struct OpenDalLister {
    operator: Operator,
}

impl OpenDalLister {
    /// Create a new lister with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Lister for OpenDalLister {
    async fn list_containers(&self) -> Result<Vec<String>> {
        let entries = self.operator.list("/").await?;
        let mut names: Vec<String> = entries
            .iter()
            .filter(|entry| entry.metadata().mode().is_dir())
            .map(|entry| entry.path().trim_matches('/').to_string())
            .filter(|name| is_valid_container_name(name))
            .collect();
        names.sort();
        Ok(names)
    }

    async fn list_objects(&self, container: &str) -> Result<Vec<String>> {
        ensure!(
            is_valid_container_name(container),
            InvalidContainerNameSnafu {
                name: container.to_string()
            }
        );
        let prefix = container_path(container);
        let lister = self.operator.lister_with(&prefix).recursive(true).await?;

        let mut keys: Vec<String> = lister
            .try_filter_map(|entry| {
                let key = if entry.metadata().mode().is_dir() {
                    None
                } else {
                    Some(relative_key(entry.path(), container))
                };
                async move { Ok(key) }
            })
            .try_collect()
            .await?;
        keys.sort();
        Ok(keys)
    }
}
