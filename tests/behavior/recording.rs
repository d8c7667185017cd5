use bucketsh::error::{Error, Result};
use bucketsh::storage::{ObjectStore, StorageClient};
use std::sync::Mutex;

/// Failure injected by a [`RecordingStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    None,
    /// Every existence check is refused by the backend.
    Denied,
    /// Creating a directory fails with an I/O error.
    CreateFails,
    /// Uploading an object fails with an I/O error.
    UploadFails,
    /// Downloading an object fails with an I/O error.
    DownloadFails,
    /// Deleting an object fails with an I/O error.
    DeleteFails,
    /// Deleting a directory fails with an I/O error.
    DeleteDirFails,
}

/// The error a failing fault carries, shown as `IO error: disk on fire`.
fn disk_on_fire() -> Error {
    Error::Io {
        source: std::io::Error::other("disk on fire"),
    }
}

/// Wraps the test client and records every backend call made through it.
pub struct RecordingStore {
    inner: StorageClient,
    fault: Fault,
    calls: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn new(inner: StorageClient) -> Self {
        Self::with_fault(inner, Fault::None)
    }

    pub fn with_fault(inner: StorageClient, fault: Fault) -> Self {
        Self {
            inner,
            fault,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn denied(&self, path: &str) -> Result<()> {
        if self.fault == Fault::Denied {
            return Err(Error::PermissionDenied {
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

impl ObjectStore for RecordingStore {
    async fn container_exists(&self, name: &str) -> Result<bool> {
        self.record(format!("container_exists({name})"));
        self.denied(name)?;
        self.inner.container_exists(name).await
    }

    async fn object_exists(&self, container: &str, key: &str) -> Result<bool> {
        self.record(format!("object_exists({container}, {key})"));
        self.denied(container)?;
        self.inner.object_exists(container, key).await
    }

    async fn create_container(&self, name: &str, region: &str) -> Result<()> {
        self.record(format!("create_container({name}, {region})"));
        if self.fault == Fault::CreateFails {
            return Err(Error::CreateContainerFailed {
                name: name.to_string(),
                region: region.to_string(),
                source: Box::new(disk_on_fire()),
            });
        }
        self.inner.create_container(name, region).await
    }

    async fn list_containers(&self) -> Result<Vec<String>> {
        self.record("list_containers()".to_string());
        self.inner.list_containers().await
    }

    async fn list_objects(&self, container: &str) -> Result<Vec<String>> {
        self.record(format!("list_objects({container})"));
        self.inner.list_objects(container).await
    }

    async fn upload(
        &self,
        local_path: &str,
        container: &str,
        key: &str,
        content_type: &str,
    ) -> Result<()> {
        self.record(format!(
            "upload({local_path}, {container}, {key}, {content_type})"
        ));
        if self.fault == Fault::UploadFails {
            return Err(disk_on_fire());
        }
        self.inner
            .upload(local_path, container, key, content_type)
            .await
    }

    async fn download(&self, container: &str, key: &str, local_path: &str) -> Result<()> {
        self.record(format!("download({container}, {key}, {local_path})"));
        if self.fault == Fault::DownloadFails {
            return Err(disk_on_fire());
        }
        self.inner.download(container, key, local_path).await
    }

    async fn delete_object(&self, container: &str, key: &str) -> Result<()> {
        self.record(format!("delete_object({container}, {key})"));
        if self.fault == Fault::DeleteFails {
            return Err(disk_on_fire());
        }
        self.inner.delete_object(container, key).await
    }

    async fn delete_container(&self, name: &str) -> Result<()> {
        self.record(format!("delete_container({name})"));
        if self.fault == Fault::DeleteDirFails {
            return Err(disk_on_fire());
        }
        self.inner.delete_container(name).await
    }
}
