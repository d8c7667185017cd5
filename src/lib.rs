pub mod cli;
mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod messages;
pub mod shell;
pub mod storage;
