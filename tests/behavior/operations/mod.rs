pub mod delete;
pub mod shell;
