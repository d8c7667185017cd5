// Buffer related constants
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

// Region every new directory is created in
pub const DEFAULT_REGION: &str = "us-east-2";

// Filesystem default
pub const DEFAULT_FS_ROOT: &str = "./storage";
