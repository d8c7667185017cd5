use super::epoch_millis;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::messages::Issue;
use crate::storage::ObjectStore;
use std::path::Path;

impl<S: ObjectStore> Dispatcher<S> {
    /// Download an object into a local file.
    ///
    /// When the local path is already taken, the download is written to
    /// `<path>.bak.<epoch millis>` and the existing file is not touched.
    pub async fn download(
        &self,
        dest_object_name: &str,
        bucket_name: &str,
        source_file_name: &str,
    ) -> Result<String> {
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

        let requested = if source_file_name.is_empty() {
            dest_object_name
        } else {
            source_file_name
        };
        let local_path = if Path::new(requested).exists() {
            format!("{requested}.bak.{}", epoch_millis())
        } else {
            requested.to_string()
        };

        if let Err(e) = self
            .store
            .download(bucket_name, dest_object_name, &local_path)
            .await
        {
            log::error!("download {dest_object_name} failed: {e}");
            return Ok(format!(
                "Failed to download {dest_object_name} to {bucket_name}/{local_path}: {e}"
            ));
        }

        Ok(format!(
            "Object {dest_object_name} downloaded from bucket {bucket_name}."
        ))
    }
}
