//! Command handlers for the pyfront CLI.
//!
//! Each handler has a pure half that works on source text and returns the
//! rendered output (used by tests), and a `*_file` half that reads the file,
//! prints, and exits non-zero on error.

mod debug;
mod fmt;

pub use debug::{lex_file, parse_file, render_tokens, summarize, Summary};
pub use fmt::{format_file, format_source, Formatted};

/// Read a source file, exiting with a message if it cannot be read.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
