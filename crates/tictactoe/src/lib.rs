//! Terminal front end for [`tictactoe_core`].
//!
//! Configuration, game history and the line-based session that drives the
//! engine from stdin/stdout.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod history;
mod terminal;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use history::{HistoryError, HistoryStore, JsonLinesHistory, MemoryHistory};
pub use terminal::{Command, Terminal};
