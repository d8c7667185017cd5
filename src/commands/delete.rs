use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::messages::Issue;
use crate::storage::ObjectStore;

impl<S: ObjectStore> Dispatcher<S> {
    pub async fn delete(&self, dest_object_name: &str, bucket_name: &str) -> Result<String> {
        if !self.store.container_exists(bucket_name).await? {
            return Ok(Issue::NonExistentBucket.reply());
        }
        if !self
            .store
            .object_exists(bucket_name, dest_object_name)
            .await?
        {
            return Ok(Issue::NonExistentObject.reply());
        }

        if let Err(e) = self
            .store
            .delete_object(bucket_name, dest_object_name)
            .await
        {
            log::error!("delete {dest_object_name} failed: {e}");
            return Ok(format!(
                "Failed to delete {dest_object_name} from directory {bucket_name}: {e}"
            ));
        }

        Ok(format!(
            "Object {dest_object_name} deleted from bucket {bucket_name}."
        ))
    }
}
