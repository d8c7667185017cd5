//! User-facing sentences the shell answers with.

/// Reply for a keyword the dispatcher does not know.
pub const COMMAND_NOT_RECOGNIZED: &str = "Command not recognized.";

pub const PROMPT: &str = "Enter command ('help' to see all commands, 'exit' to quit)>";

pub const FAREWELL: &str = "Goodbye!";

pub const HELP: &[&str] = &[
    "Supported Commands:",
    "1. createdir <bucket_name>",
    "2. upload <source_file_name> <bucket_name> [<dest_object_name>]",
    "3. download <dest_object_name> <bucket_name> [<source_file_name>]",
    "4. delete <dest_object_name> <bucket_name>",
    "5. deletedir <bucket_name>",
    "6. find <file_extension> [<bucket_name>] -- e.g.: 1. find txt  2. find txt bucket1 --",
    "7. listdir [<bucket_name>]",
];

/// Every failure a command can report without raising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    IncorrectParameterNumber,
    NotImplemented,
    BucketNameExists,
    BucketNameEmpty,
    InvalidBucketName,
    BucketNotEmpty,
    MissingSourceFile,
    NonExistentBucket,
    NonExistentObject,
    NotAuthorizedBucket,
    UnknownError,
}

impl Issue {
    /// Stable identifier, used in logs.
    pub fn key(self) -> &'static str {
        match self {
            Issue::IncorrectParameterNumber => "incorrect_parameter_number",
            Issue::NotImplemented => "not_implemented",
            Issue::BucketNameExists => "bucket_name_exists",
            Issue::BucketNameEmpty => "bucket_name_empty",
            Issue::InvalidBucketName => "invalid_bucket_name",
            Issue::BucketNotEmpty => "bucket_not_empty",
            Issue::MissingSourceFile => "missing_source_file",
            Issue::NonExistentBucket => "non_existent_bucket",
            Issue::NonExistentObject => "non_existent_object",
            Issue::NotAuthorizedBucket => "not_authorized_bucket",
            Issue::UnknownError => "unknown_error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Issue::IncorrectParameterNumber => "Incorrect number of parameters provided",
            Issue::NotImplemented => "Functionality not implemented yet!",
            Issue::BucketNameExists => "Directory already exists.",
            Issue::BucketNameEmpty => "Directory name cannot be empty.",
            Issue::InvalidBucketName => "Directory name cannot contain '/' or be '.' or '..'.",
            Issue::BucketNotEmpty => "Directory is not empty. Delete objects before proceeding.",
            Issue::MissingSourceFile => "Source file cannot be found.",
            Issue::NonExistentBucket => "Directory does not exist.",
            Issue::NonExistentObject => "Destination object does not exist.",
            Issue::NotAuthorizedBucket => "You are not authorized to access this directory",
            Issue::UnknownError => "Something was not correct with the request. Try again.",
        }
    }

    /// The catalog sentence as an owned reply.
    pub fn reply(self) -> String {
        log::debug!("reply issue={}", self.key());
        self.message().to_string()
    }
}
