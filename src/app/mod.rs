pub mod args;
pub mod cli;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use args::{HarnessArgs, Partition, extract_int, extract_string, validate_partition};
pub use cli::CliApp;
pub use error::AppError;
pub use report::{render_report, write_fixture_files, write_report};
