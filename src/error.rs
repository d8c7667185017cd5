use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Environment variable '{key}' is required but not found"))]
    MissingEnvVar { key: String },

    #[snafu(display("Unsupported storage provider: {provider}"))]
    UnsupportedProvider { provider: String },

    #[snafu(display("'{name}' is not a valid directory name"))]
    InvalidContainerName { name: String },

    #[snafu(display("'{key}' is not a valid object name"))]
    InvalidObjectKey { key: String },

    #[snafu(display("Directory '{name}' is not empty"))]
    ContainerNotEmpty { name: String },

    #[snafu(display("Permission denied while accessing '{path}'"))]
    PermissionDenied { path: String },

    #[snafu(display("Failed to check whether '{path}' exists: {source}"))]
    ExistenceCheckFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to create directory '{name}' in region {region}: {source}"))]
    CreateContainerFailed {
        name: String,
        region: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to list '{path}': {source}"))]
    ListFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to upload '{local_path}' to '{remote_path}': {source}"))]
    UploadFailed {
        local_path: String,
        remote_path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to download '{remote_path}' to '{local_path}': {source}"))]
    DownloadFailed {
        remote_path: String,
        local_path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to delete '{path}': {source}"))]
    DeleteFailed { path: String, source: Box<Error> },

    #[snafu(display("Cannot open log file {}: {source}", path.display()))]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Cannot install logger: {source}"))]
    LoggerInit { source: log::SetLoggerError },

    #[snafu(display("OpenDAL error: {source}"))]
    OpenDal { source: opendal::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl Error {
    /// Whether the failure, or the failure it wraps, is a permission problem.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::PermissionDenied { .. } => true,
            Error::OpenDal { source } => source.kind() == opendal::ErrorKind::PermissionDenied,
            Error::ExistenceCheckFailed { source, .. }
            | Error::CreateContainerFailed { source, .. }
            | Error::ListFailed { source, .. }
            | Error::UploadFailed { source, .. }
            | Error::DownloadFailed { source, .. }
            | Error::DeleteFailed { source, .. } => source.is_permission_denied(),
            _ => false,
        }
    }

    /// Whether the failure, or the failure it wraps, reports a non-empty directory.
    pub fn is_container_not_empty(&self) -> bool {
        match self {
            Error::ContainerNotEmpty { .. } => true,
            Error::DeleteFailed { source, .. } => source.is_container_not_empty(),
            _ => false,
        }
    }
}

impl From<opendal::Error> for Error {
    fn from(error: opendal::Error) -> Self {
        Error::OpenDal { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
