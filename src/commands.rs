// Operation wrappers behind each shell keyword
mod createdir;
mod delete;
mod deletedir;
mod download;
mod find;
mod listdir;
mod upload;

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, used to name download backups.
pub(crate) fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
