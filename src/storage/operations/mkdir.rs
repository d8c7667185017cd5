// Container creation operation trait and implementation
use crate::error::{InvalidContainerNameSnafu, Result};
use crate::storage::utils::path::{container_path, is_valid_container_name};
use opendal::Operator;
use snafu::ensure;

/// Trait for creating containers in storage.
pub trait Mkdirer {
    /// Create a container.
    ///
    /// # Arguments
    /// * `name` - Name of the container to create
    /// * `region` - Region the container is placed in
    ///
    /// # Returns
    /// * `Result<()>` - Success or detailed error information
    async fn mkdir(&self, name: &str, region: &str) -> Result<()>;
}

/// Implementation of Mkdirer for OpenDAL Operator.
///
/// Containers are top-level directories of the operator root. The region is
/// fixed by the operator's own configuration, so it is only recorded here.
pub struct OpenDalMkdirer {
    operator: Operator,
}

impl OpenDalMkdirer {
    /// Create a new mkdirer with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Mkdirer for OpenDalMkdirer {
    async fn mkdir(&self, name: &str, region: &str) -> Result<()> {
        ensure!(
            is_valid_container_name(name),
            InvalidContainerNameSnafu {
                name: name.to_string()
            }
        );
        let path = container_path(name);
        log::debug!("create_dir path={path} region={region}");
        self.operator.create_dir(&path).await?;
        Ok(())
    }
}
