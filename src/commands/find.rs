use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::messages::Issue;
use crate::storage::ObjectStore;

impl<S: ObjectStore> Dispatcher<S> {
    /// Search objects by file extension. Not implemented: every call answers
    /// with the `not_implemented` sentence.
    pub async fn find(&self, file_extension: &str, bucket_name: &str) -> Result<String> {
        log::debug!("find extension={file_extension:?} bucket={bucket_name:?}");
        Ok(Issue::NotImplemented.reply())
    }
}
