//! Command-line front end.
//!
//! - **command.rs**: parsed invocation (`CliArgs`, `CliCommand`)
//! - **parser.rs**: hand-written argument parsing and the usage text
//! - **examples.rs**: built-in example phrases and position lookup
//! - **app.rs**: runs a parsed invocation against an output stream
//! - **theme.rs**: terminal colors for labels

use thiserror::Error;

pub mod app;
pub mod command;
pub mod examples;
pub mod parser;
pub mod theme;

pub use app::App;
pub use command::{CliArgs, CliCommand};
pub use parser::{parse_args, USAGE};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Can't find example at position {position}. Allowed range [1:{count}]")]
    ExampleNotFound { position: i64, count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::ExampleNotFound { .. } | CliError::Io(_) => 1,
        }
    }
}
