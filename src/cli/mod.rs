//! CLI layer: the bundled host program and its error/exit-code mapping

pub mod app;
pub mod error;
pub mod output;

pub use app::build_app;
pub use error::{CliError, CliResult};
