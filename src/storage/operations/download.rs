use crate::error::Result;
use opendal::Operator;
use std::path::Path;
use tokio::fs;

/// Trait for downloading objects from storage.
pub trait Downloader {
    /// Download a single object to a local file, replacing whatever is at `local_path`.
    ///
    /// # Returns
    /// * `Result<u64>` - Number of bytes written
    async fn download(&self, remote_path: &str, local_path: &str) -> Result<u64>;
}

/// Implementation of Downloader for OpenDAL Operator.
pub struct OpenDalDownloader {
    operator: Operator,
}

impl OpenDalDownloader {
    /// Create a new downloader with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Downloader for OpenDalDownloader {
    async fn download(&self, remote_path: &str, local_path: &str) -> Result<u64> {
        let data = self.operator.read(remote_path).await?;
        let local_file_path = Path::new(local_path);
        if let Some(parent) = local_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let bytes = data.to_vec();
        fs::write(local_file_path, &bytes).await?;
        log::debug!("downloaded {remote_path} -> {local_path} ({} bytes)", bytes.len());
        Ok(bytes.len() as u64)
    }
}
