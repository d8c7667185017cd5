// Storage operation traits and implementations
pub mod delete;
pub mod download;
pub mod exists;
pub mod list;
pub mod mkdir;
pub mod upload;

pub use delete::Deleter;
pub use download::Downloader;
pub use exists::Checker;
pub use list::Lister;
pub use mkdir::Mkdirer;
pub use upload::Uploader;
