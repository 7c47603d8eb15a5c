//! esf Formatter Rules
//!
//! Whitespace rules for parentheses around ECMAScript expressions, applied
//! to a token stream with the syntax tree as a guide.
//!
//! # Architecture
//!
//! The crate is organized in layers, bottom-up:
//!
//! 1. **Whitespace** ([`whitespace`]): named spacing rules, the
//!    [`WhitespaceLimiter`] trait, and deferred edits that collapse
//!    whitespace runs next to a token
//! 2. **Rules** ([`rules`]): locating the parentheses that wrap a node and
//!    the per-kind policy deciding whether they take interior spacing
//! 3. **Pass** ([`format_tokens`]): visits every node, records directives,
//!    then applies them
//!
//! # Usage
//!
//! ```ignore
//! let mut tokens = esf_lexer::tokenize(source)?;
//! let output = esf_parse::parse(&tokens)?;
//! let stats = esf_fmt::format_tokens(&mut tokens, &output.arena, output.root, &config);
//! let formatted = tokens.to_source();
//! ```
//!
//! Only whitespace tokens are ever inserted, removed, or rewritten.

pub mod config;
mod format;
pub mod rules;
pub mod whitespace;

pub use config::{ConfigError, FormatConfig, SpaceAmount, WhitespaceConfig};
pub use format::{format_tokens, FormatStats};
pub use rules::{
    add_space_inside, classify, find_parentheses, locate_parentheses, needs_space_inside,
    ParenSpacing, ParenthesisPair,
};
pub use whitespace::{Directive, Side, SpacingEdits, SpacingRule, WhitespaceLimiter};
