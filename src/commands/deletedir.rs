use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::messages::Issue;
use crate::storage::ObjectStore;

impl<S: ObjectStore> Dispatcher<S> {
    /// Delete a directory. Only empty directories can be deleted.
    pub async fn deletedir(&self, bucket_name: &str) -> Result<String> {
        if !self.store.container_exists(bucket_name).await? {
            return Ok(Issue::NonExistentBucket.reply());
        }

        match self.store.delete_container(bucket_name).await {
            Ok(()) => Ok(format!("Deleted bucket {bucket_name}.")),
            Err(e) if e.is_container_not_empty() => Ok(Issue::BucketNotEmpty.reply()),
            Err(e) => {
                log::error!("deletedir {bucket_name} failed: {e}");
                Ok(format!("Failed to delete bucket {bucket_name}: {e}"))
            }
        }
    }
}
