use crate::error::{Error, InvalidContainerNameSnafu, InvalidObjectKeySnafu, Result};
use opendal::Operator;
use snafu::ensure;
use std::str::FromStr;

pub mod constants;
mod operations;
pub(crate) mod utils;

use self::operations::delete::OpenDalDeleter;
use self::operations::download::OpenDalDownloader;
use self::operations::exists::OpenDalChecker;
use self::operations::list::OpenDalLister;
use self::operations::mkdir::OpenDalMkdirer;
use self::operations::upload::OpenDalUploader;
use self::operations::{Checker, Deleter, Downloader, Lister, Mkdirer, Uploader};
use self::utils::path::{
    container_path, is_valid_container_name, is_valid_object_key, object_path,
};
use crate::wrap_err;

/// Storage provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageProvider {
    Oss,
    S3,
    Fs,
}

impl FromStr for StorageProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "oss" => Ok(Self::Oss),
            "s3" | "minio" => Ok(Self::S3),
            "fs" => Ok(Self::Fs),
            _ => Err(Error::UnsupportedProvider {
                provider: s.to_string(),
            }),
        }
    }
}

/// Unified storage configuration for different providers
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub provider: StorageProvider,
    pub bucket: String,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub root_path: Option<String>,
}

impl StorageConfig {
    pub fn oss(
        bucket: String,
        access_key_id: String,
        access_key_secret: String,
        region: Option<String>,
    ) -> Self {
        Self {
            provider: StorageProvider::Oss,
            bucket,
            access_key_id: Some(access_key_id),
            access_key_secret: Some(access_key_secret),
            endpoint: None,
            region,
            root_path: None,
        }
    }

    pub fn s3(
        bucket: String,
        access_key_id: String,
        secret_access_key: String,
        region: Option<String>,
    ) -> Self {
        Self {
            provider: StorageProvider::S3,
            bucket,
            access_key_id: Some(access_key_id),
            access_key_secret: Some(secret_access_key),
            endpoint: None,
            region,
            root_path: None,
        }
    }

    pub fn fs(root_path: String) -> Self {
        Self {
            provider: StorageProvider::Fs,
            bucket: "local".to_string(),
            access_key_id: None,
            access_key_secret: None,
            endpoint: None,
            region: None,
            root_path: Some(root_path),
        }
    }
}

/// The storage capability the shell commands are written against.
///
/// A container is what the shell calls a directory; objects are keys
/// inside it. Existence checks return `Ok(false)` only for "not found" and
/// fail for every other backend error.
pub trait ObjectStore {
    async fn container_exists(&self, name: &str) -> Result<bool>;

    async fn object_exists(&self, container: &str, key: &str) -> Result<bool>;

    async fn create_container(&self, name: &str, region: &str) -> Result<()>;

    async fn list_containers(&self) -> Result<Vec<String>>;

    async fn list_objects(&self, container: &str) -> Result<Vec<String>>;

    async fn upload(
        &self,
        local_path: &str,
        container: &str,
        key: &str,
        content_type: &str,
    ) -> Result<()>;

    async fn download(&self, container: &str, key: &str, local_path: &str) -> Result<()>;

    async fn delete_object(&self, container: &str, key: &str) -> Result<()>;

    /// Must fail with an error for which [`Error::is_container_not_empty`]
    /// holds when the container still has objects.
    async fn delete_container(&self, name: &str) -> Result<()>;
}

/// Unified storage client using OpenDAL
#[derive(Clone)]
pub struct StorageClient {
    operator: Operator,
    provider: StorageProvider,
}

impl StorageClient {
    pub async fn new(config: StorageConfig) -> Result<Self> {
        if config.provider == StorageProvider::Fs {
            let root = config
                .root_path
                .as_deref()
                .unwrap_or(constants::DEFAULT_FS_ROOT);
            tokio::fs::create_dir_all(root).await?;
        }
        let operator = Self::build_operator(&config)?;
        Ok(Self {
            operator,
            provider: config.provider,
        })
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Object path for `key`, refusing anything that would leave the container.
    fn checked_object_path(container: &str, key: &str) -> Result<String> {
        ensure!(
            is_valid_container_name(container),
            InvalidContainerNameSnafu {
                name: container.to_string()
            }
        );
        ensure!(
            is_valid_object_key(key),
            InvalidObjectKeySnafu {
                key: key.to_string()
            }
        );
        Ok(object_path(container, key))
    }

    fn build_operator(config: &StorageConfig) -> Result<Operator> {
        match &config.provider {
            StorageProvider::Oss => {
                #[cfg(feature = "oss")]
                {
                    let mut builder = opendal::services::Oss::default().bucket(&config.bucket);
                    if let Some(access_key_id) = &config.access_key_id {
                        builder = builder.access_key_id(access_key_id);
                    }
                    if let Some(access_key_secret) = &config.access_key_secret {
                        builder = builder.access_key_secret(access_key_secret);
                    }
                    if let Some(endpoint) = &config.endpoint {
                        builder = builder.endpoint(endpoint);
                    }
                    Ok(Operator::new(builder)?.finish())
                }

                #[cfg(not(feature = "oss"))]
                {
                    Err(Error::UnsupportedProvider {
                        provider: "oss (feature disabled)".to_string(),
                    })
                }
            }
            StorageProvider::S3 => {
                #[cfg(feature = "s3")]
                {
                    let mut builder = opendal::services::S3::default().bucket(&config.bucket);
                    if let Some(access_key_id) = &config.access_key_id {
                        builder = builder.access_key_id(access_key_id);
                    }
                    if let Some(secret_access_key) = &config.access_key_secret {
                        builder = builder.secret_access_key(secret_access_key);
                    }
                    if let Some(region) = &config.region {
                        builder = builder.region(region);
                    }
                    if let Some(endpoint) = &config.endpoint {
                        builder = builder.endpoint(endpoint);
                    }
                    Ok(Operator::new(builder)?.finish())
                }

                #[cfg(not(feature = "s3"))]
                {
                    Err(Error::UnsupportedProvider {
                        provider: "s3 (feature disabled)".to_string(),
                    })
                }
            }
            StorageProvider::Fs => {
                #[cfg(feature = "fs")]
                {
                    let root = config
                        .root_path
                        .as_deref()
                        .unwrap_or(constants::DEFAULT_FS_ROOT);
                    let builder = opendal::services::Fs::default().root(root);
                    Ok(Operator::new(builder)?.finish())
                }

                #[cfg(not(feature = "fs"))]
                {
                    Err(Error::UnsupportedProvider {
                        provider: "fs (feature disabled)".to_string(),
                    })
                }
            }
        }
    }
}

impl ObjectStore for StorageClient {
    async fn container_exists(&self, name: &str) -> Result<bool> {
        log::debug!(
            "container_exists provider={:?} name={}",
            self.provider,
            name
        );
        OpenDalChecker::new(self.operator.clone())
            .container_exists(name)
            .await
    }

    async fn object_exists(&self, container: &str, key: &str) -> Result<bool> {
        log::debug!(
            "object_exists provider={:?} container={} key={}",
            self.provider,
            container,
            key
        );
        OpenDalChecker::new(self.operator.clone())
            .object_exists(container, key)
            .await
    }

    async fn create_container(&self, name: &str, region: &str) -> Result<()> {
        log::debug!(
            "create_container provider={:?} name={} region={}",
            self.provider,
            name,
            region
        );
        let mkdirer = OpenDalMkdirer::new(self.operator.clone());
        wrap_err!(
            mkdirer.mkdir(name, region).await,
            CreateContainerFailed {
                name: name.to_string(),
                region: region.to_string()
            }
        )
    }

    async fn list_containers(&self) -> Result<Vec<String>> {
        log::debug!("list_containers provider={:?}", self.provider);
        let lister = OpenDalLister::new(self.operator.clone());
        wrap_err!(
            lister.list_containers().await,
            ListFailed {
                path: "/".to_string()
            }
        )
    }

    async fn list_objects(&self, container: &str) -> Result<Vec<String>> {
        log::debug!(
            "list_objects provider={:?} container={}",
            self.provider,
            container
        );
        let lister = OpenDalLister::new(self.operator.clone());
        wrap_err!(
            lister.list_objects(container).await,
            ListFailed {
                path: container_path(container)
            }
        )
    }

    async fn upload(
        &self,
        local_path: &str,
        container: &str,
        key: &str,
        content_type: &str,
    ) -> Result<()> {
        let remote_path = Self::checked_object_path(container, key)?;
        log::debug!(
            "upload provider={:?} local_path={} remote_path={} content_type={}",
            self.provider,
            local_path,
            remote_path,
            content_type
        );
        let uploader = OpenDalUploader::new(self.operator.clone());
        wrap_err!(
            uploader
                .upload(local_path, &remote_path, content_type)
                .await
                .map(|_| ()),
            UploadFailed {
                local_path: local_path.to_string(),
                remote_path: remote_path.clone()
            }
        )
    }

    async fn download(&self, container: &str, key: &str, local_path: &str) -> Result<()> {
        let remote_path = Self::checked_object_path(container, key)?;
        log::debug!(
            "download provider={:?} remote_path={} local_path={}",
            self.provider,
            remote_path,
            local_path
        );
        let downloader = OpenDalDownloader::new(self.operator.clone());
        wrap_err!(
            downloader
                .download(&remote_path, local_path)
                .await
                .map(|_| ()),
            DownloadFailed {
                remote_path: remote_path.clone(),
                local_path: local_path.to_string()
            }
        )
    }

    async fn delete_object(&self, container: &str, key: &str) -> Result<()> {
        let remote_path = Self::checked_object_path(container, key)?;
        log::debug!(
            "delete_object provider={:?} remote_path={}",
            self.provider,
            remote_path
        );
        let deleter = OpenDalDeleter::new(self.operator.clone());
        wrap_err!(
            deleter.delete_object(&remote_path).await,
            DeleteFailed {
                path: remote_path.clone()
            }
        )
    }

    async fn delete_container(&self, name: &str) -> Result<()> {
        log::debug!(
            "delete_container provider={:?} name={}",
            self.provider,
            name
        );
        let deleter = OpenDalDeleter::new(self.operator.clone());
        wrap_err!(
            deleter.delete_container(name).await,
            DeleteFailed {
                path: container_path(name)
            }
        )
    }
}
