//! Reserved word classification.

use esf_ir::TokenKind;

/// Classify an identifier-shaped word.
pub(crate) fn word_kind(word: &str) -> TokenKind {
    match word {
        "true" | "false" => TokenKind::Boolean,
        "null" => TokenKind::Null,
        "break" | "case" | "catch" | "class" | "const" | "continue" | "debugger" | "default"
        | "delete" | "do" | "else" | "export" | "extends" | "finally" | "for" | "function"
        | "if" | "import" | "in" | "instanceof" | "let" | "new" | "return" | "super"
        | "switch" | "this" | "throw" | "try" | "typeof" | "var" | "void" | "while" | "with"
        | "yield" => TokenKind::Keyword,
        _ => TokenKind::Identifier,
    }
}
