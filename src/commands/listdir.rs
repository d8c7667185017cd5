use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::messages::Issue;
use crate::storage::ObjectStore;

impl<S: ObjectStore> Dispatcher<S> {
    /// Names of all directories, or the object keys of one directory, joined by ", ".
    pub async fn listdir(&self, bucket_name: &str) -> Result<String> {
        if bucket_name.is_empty() {
            let names = self.store.list_containers().await?;
            return Ok(names.join(", "));
        }

        if !self.store.container_exists(bucket_name).await? {
            return Ok(Issue::NonExistentBucket.reply());
        }

        let keys = self.store.list_objects(bucket_name).await?;
        Ok(keys.join(", "))
    }
}
