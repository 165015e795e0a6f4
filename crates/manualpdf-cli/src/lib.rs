//! manualpdf CLI - Command-line interface library
//!
//! Converts the Markdown user manual to PDF, trying the HTML-rendering
//! strategy first and falling back to the direct-layout strategy.
//!
//! # Library Usage
//!
//! ```ignore
//! use manualpdf_cli::{convert_command, load_settings};
//!
//! let settings = load_settings(None)?;
//! let outcome = convert_command(&settings, &mut std::io::stdout())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Convert ΕΓΧΕΙΡΙΔΙΟ_ΧΡΗΣΤΗ.md in the current directory
//! manualpdf
//!
//! # Convert another file with the direct-layout strategy only
//! manualpdf --input guide.md --strategy direct-layout
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{
    build_converter, convert_command, exit_status, init_logging, load_settings, run_cli,
};
pub use app::{EXIT_CONVERSION_FAILED, EXIT_INPUT, EXIT_OK};
