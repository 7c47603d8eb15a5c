//! esf: parenthesis spacing for ECMAScript sources.
//!
//! Library side of the `esf` binary: the source-to-source entry point,
//! error reporting helpers, and the command implementations.

pub mod commands;

use std::sync::Once;

use esf_fmt::{format_tokens, FormatConfig};
use esf_lexer::LexError;
use esf_parse::ParseError;
use thiserror::Error;

/// Failure to format a source text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Format `source`, returning the rewritten text.
///
/// Only whitespace next to expression parentheses changes.
pub fn format_source(source: &str, config: &FormatConfig) -> Result<String, FormatError> {
    let mut tokens = esf_lexer::tokenize(source)?;
    let output = esf_parse::parse(&tokens)?;
    format_tokens(&mut tokens, &output.arena, output.root, config);
    Ok(tokens.to_source())
}

/// Byte offset in `source` where `error` occurred, if it has one.
pub fn error_offset(source: &str, error: &FormatError) -> Option<usize> {
    match error {
        FormatError::Lex(err) => Some(err.offset()),
        FormatError::Parse(err) => {
            let token = err.token()?;
            let tokens = esf_lexer::tokenize(source).ok()?;
            let mut offset = 0;
            for (id, t) in &tokens {
                if id == token {
                    return Some(offset);
                }
                offset += t.value.len();
            }
            None
        }
    }
}

/// 1-based line and column of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let prefix = &source.as_bytes()[..offset.min(source.len())];
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (line, offset.min(source.len()) - line_start + 1)
}

/// Render an error as `path:line:col: error: message`.
pub fn describe_error(path: &str, source: &str, error: &FormatError) -> String {
    match error_offset(source, error) {
        Some(offset) => {
            let (line, col) = line_col(source, offset);
            format!("{path}:{line}:{col}: error: {error}")
        }
        None => format!("{path}: error: {error}"),
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
