//! The `lex` command: dump the token stream of a file.

use super::read_file;
use crate::{describe_error, line_col, FormatError};

/// Print every token of `path` with its position.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = match esf_lexer::tokenize(&content) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", describe_error(path, &content, &FormatError::from(e)));
            std::process::exit(1);
        }
    };

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    let mut offset = 0;
    for (_, token) in &tokens {
        let (line, col) = line_col(&content, offset);
        println!("  {token:?} @ {line}:{col}");
        offset += token.value.len();
    }
}
