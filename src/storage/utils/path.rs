// Path helper utilities shared across storage operations
use std::path::Path;

/// Whether `name` can name a container: one non-empty path segment other than `.` and `..`.
pub fn is_valid_container_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && name != "." && name != ".."
}

/// Whether `key` stays inside its container: non-empty and without `.` or `..` segments.
pub fn is_valid_object_key(key: &str) -> bool {
    !key.trim_matches('/').is_empty()
        && key
            .split('/')
            .all(|segment| segment != "." && segment != "..")
}

/// Directory path of a container, always ending with '/'.
pub fn container_path(name: &str) -> String {
    let trimmed = name.trim_matches('/');
    format!("{trimmed}/")
}

/// Full path of an object key inside a container.
pub fn object_path(container: &str, key: &str) -> String {
    format!("{}{}", container_path(container), key.trim_start_matches('/'))
}

/// Strip the container prefix from a listed entry path.
pub fn relative_key(entry_path: &str, container: &str) -> String {
    let prefix = container_path(container);
    let entry_path = entry_path.trim_start_matches('/');
    entry_path
        .strip_prefix(prefix.as_str())
        .unwrap_or(entry_path)
        .to_string()
}

/// Extension of a local file name including its leading dot, or "" if it has none.
pub fn file_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
