// Error conversion helpers and wrapping macro for Snafu-based errors
use crate::error::{Error, Result};
use opendal::{ErrorKind, Metadata};

/// Convert different error types into our unified Error type.
pub trait IntoShellError {
    fn into_error(self) -> Error;
}

impl IntoShellError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl IntoShellError for opendal::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

impl IntoShellError for std::io::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

/// Turn the outcome of a `stat` into a presence answer.
///
/// A successful stat means present and `NotFound` means absent. Permission
/// problems surface as [`Error::PermissionDenied`], everything else as
/// [`Error::ExistenceCheckFailed`].
pub fn presence(path: &str, stat: opendal::Result<Metadata>) -> Result<bool> {
    match stat {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(Error::PermissionDenied {
            path: path.to_string(),
        }),
        Err(e) => Err(Error::ExistenceCheckFailed {
            path: path.to_string(),
            source: Box::new(e.into()),
        }),
    }
}

/// Macro to wrap a Result-producing expression into a Snafu variant with `source: Box<Error>`.
/// Example:
/// wrap_err!(op.await, DownloadFailed { remote_path: rp, local_path: lp })?
#[macro_export]
macro_rules! wrap_err {
    ($expr:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {{
        $expr.map_err(|e| {
            let src: $crate::error::Error = $crate::storage::utils::error::IntoShellError::into_error(e);
            $crate::error::Error::$variant { $($field: $value),*, source: Box::new(src) }
        })
    }};
}
