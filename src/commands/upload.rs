use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::messages::Issue;
use crate::storage::ObjectStore;
use crate::storage::utils::path::file_extension;
use std::path::Path;

impl<S: ObjectStore> Dispatcher<S> {
    /// Upload a local file into a directory.
    ///
    /// The object is named after the source file unless `dest_object_name`
    /// is given, and the file extension is stored as its content type.
    pub async fn upload(
        &self,
        source_file_name: &str,
        bucket_name: &str,
        dest_object_name: &str,
    ) -> Result<String> {
        if !Path::new(source_file_name).is_file() {
            return Ok(Issue::MissingSourceFile.reply());
        }

        if !self.store.container_exists(bucket_name).await? {
            return Ok(Issue::NonExistentBucket.reply());
        }

        let dest_object_name = if dest_object_name.is_empty() {
            source_file_name
        } else {
            dest_object_name
        };
        let content_type = file_extension(source_file_name);

        if let Err(e) = self
            .store
            .upload(source_file_name, bucket_name, dest_object_name, &content_type)
            .await
        {
            log::error!("upload {source_file_name} failed: {e}");
            return Ok(format!(
                "Failed to upload {source_file_name} to {bucket_name}/{dest_object_name}: {e}"
            ));
        }

        Ok(format!(
            "File {source_file_name} uploaded to bucket {bucket_name}."
        ))
    }
}
