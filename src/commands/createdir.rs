use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::messages::Issue;
use crate::storage::ObjectStore;
use crate::storage::utils::path::is_valid_container_name;

impl<S: ObjectStore> Dispatcher<S> {
    /// Create a new directory in the fixed region.
    ///
    /// Backend failures are logged and returned as errors.
    pub async fn createdir(&self, bucket_name: &str) -> Result<String> {
        if bucket_name.is_empty() {
            return Ok(Issue::BucketNameEmpty.reply());
        }
        if !is_valid_container_name(bucket_name) {
            return Ok(Issue::InvalidBucketName.reply());
        }

        if self.store.container_exists(bucket_name).await? {
            return Ok(Issue::BucketNameExists.reply());
        }

        if let Err(e) = self.store.create_container(bucket_name, self.region).await {
            log::error!("createdir {bucket_name} failed: {e}");
            return Err(e);
        }

        Ok(format!("Directory {bucket_name} created."))
    }
}
