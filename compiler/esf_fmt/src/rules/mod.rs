//! Formatting rules for expression parentheses.
//!
//! The parser discards parentheses, so nothing in the syntax tree says
//! whether an expression was written as `(expr)`. These rules rediscover
//! the wrapping pair from the token stream and decide whether the
//! configured whitespace limits apply inside it.
//!
//! - [`parentheses`]: locate the pair enclosing a node
//! - [`classification`]: which node kinds receive interior spacing

pub mod classification;
pub mod parentheses;

pub use classification::{add_space_inside, classify, needs_space_inside, ParenSpacing};
pub use parentheses::{find_parentheses, locate_parentheses, ParenthesisPair};

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
