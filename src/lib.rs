pub mod bootstrap;
pub mod config;
pub mod export;
pub mod history_log;
pub mod observability;

pub use config::Config;
pub use history_log::{HistoryError, HistoryLog};
