use crate::error::Result;
use crate::storage::constants::DEFAULT_BUFFER_SIZE;
use opendal::Operator;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncReadExt, BufReader};

/// Trait for uploading local files to storage.
pub trait Uploader {
    /// Upload a single local file to a remote object path.
    ///
    /// # Arguments
    /// * `local_path` - Source file on the local filesystem
    /// * `remote_path` - Destination object path in storage
    /// * `content_type` - Content type recorded with the object, ignored when empty
    ///
    /// # Returns
    /// * `Result<u64>` - Number of bytes written
    async fn upload(&self, local_path: &str, remote_path: &str, content_type: &str) -> Result<u64>;
}

/// Implementation of Uploader for OpenDAL Operator.
pub struct OpenDalUploader {
    operator: Operator,
}

impl OpenDalUploader {
    /// Create a new uploader with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Content type is only sent to services that can store it.
    fn supports_content_type(&self) -> bool {
        self.operator.info().full_capability().write_with_content_type
    }
}

impl Uploader for OpenDalUploader {
    async fn upload(&self, local_path: &str, remote_path: &str, content_type: &str) -> Result<u64> {
        let file = fs::File::open(Path::new(local_path)).await?;
        let mut reader = BufReader::new(file);
        let mut buffer = vec![0u8; DEFAULT_BUFFER_SIZE];
        let mut total_bytes = 0u64;

        let mut writer = if !content_type.is_empty() && self.supports_content_type() {
            self.operator
                .writer_with(remote_path)
                .content_type(content_type)
                .await?
        } else {
            self.operator.writer(remote_path).await?
        };

        loop {
            let bytes_read = reader.read(&mut buffer).await?;
            if bytes_read == 0 {
                break;
            }
            writer.write(buffer[..bytes_read].to_vec()).await?;
            total_bytes += bytes_read as u64;
        }
        writer.close().await?;
        log::debug!("uploaded {local_path} -> {remote_path} ({total_bytes} bytes)");
        Ok(total_bytes)
    }
}
