//! Command implementations for the `esf` binary.

mod fmt;
mod lex;
mod parens;

pub use fmt::{
    collect_js_files, format_file, format_paths, run_format, FmtOptions, FormatResult,
    FormatSummary,
};
pub use lex::lex_file;
pub use parens::{parens_file, report_parens, ParenReport};

/// Read a source file or exit with a readable message.
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
