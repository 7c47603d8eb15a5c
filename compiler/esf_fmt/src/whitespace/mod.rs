//! Whitespace limiting around individual tokens.
//!
//! Rules do not edit the token stream while they inspect it. They issue
//! [`Directive`]s through the [`WhitespaceLimiter`] trait; [`SpacingEdits`]
//! records them and applies them afterwards against a [`WhitespaceConfig`].
//!
//! # Limit Semantics
//!
//! For a directive on one side of a token, the run of whitespace tokens on
//! that side is collapsed to the configured number of spaces: removed for
//! `0`, inserted when absent and the amount is positive. A run that touches
//! a line break or the edge of the stream is left alone, so limits never
//! join lines or strip indentation. [`SpaceAmount::Preserve`] is a no-op.

use std::fmt;

use esf_ir::{Token, TokenId, TokenKind, TokenList};
use smallvec::SmallVec;
use tracing::trace;

use crate::config::{SpaceAmount, WhitespaceConfig};

/// Named spacing rule, resolved against configuration at apply time.
///
/// The names match the keys of an esformatter `whiteSpace` preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingRule {
    /// Space after the `(` wrapping an expression.
    ExpressionOpeningParentheses,
    /// Space before the `)` wrapping an expression.
    ExpressionClosingParentheses,
}

impl SpacingRule {
    pub const ALL: [SpacingRule; 2] = [
        SpacingRule::ExpressionOpeningParentheses,
        SpacingRule::ExpressionClosingParentheses,
    ];

    /// Configuration key.
    pub const fn name(self) -> &'static str {
        match self {
            SpacingRule::ExpressionOpeningParentheses => "ExpressionOpeningParentheses",
            SpacingRule::ExpressionClosingParentheses => "ExpressionClosingParentheses",
        }
    }
}

impl fmt::Display for SpacingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of a token a directive limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Before,
    After,
}

/// Receiver of whitespace directives.
pub trait WhitespaceLimiter {
    /// Limit the whitespace immediately before `token`.
    fn limit_before(&mut self, token: TokenId, rule: SpacingRule);

    /// Limit the whitespace immediately after `token`.
    fn limit_after(&mut self, token: TokenId, rule: SpacingRule);
}

/// One recorded limit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Directive {
    pub token: TokenId,
    pub side: Side,
    pub rule: SpacingRule,
}

/// Directives recorded in issue order, applied in a separate step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpacingEdits {
    directives: Vec<Directive>,
}

impl SpacingEdits {
    pub fn new() -> Self {
        SpacingEdits::default()
    }

    #[inline]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Apply every directive in order. Returns the number of tokens
    /// inserted, removed, or rewritten.
    pub fn apply(&self, tokens: &mut TokenList, config: &WhitespaceConfig) -> usize {
        self.directives
            .iter()
            .map(|directive| {
                let amount = config.amount(directive.side, directive.rule);
                limit(tokens, *directive, amount)
            })
            .sum()
    }
}

impl WhitespaceLimiter for SpacingEdits {
    fn limit_before(&mut self, token: TokenId, rule: SpacingRule) {
        self.directives.push(Directive {
            token,
            side: Side::Before,
            rule,
        });
    }

    fn limit_after(&mut self, token: TokenId, rule: SpacingRule) {
        self.directives.push(Directive {
            token,
            side: Side::After,
            rule,
        });
    }
}

/// Collapse the whitespace run on one side of a token.
fn limit(tokens: &mut TokenList, directive: Directive, amount: SpaceAmount) -> usize {
    let SpaceAmount::Exact(spaces) = amount else {
        return 0;
    };
    if !tokens.contains(directive.token) {
        return 0;
    }
    let step = |tokens: &TokenList, id: TokenId| match directive.side {
        Side::Before => tokens.prev(id),
        Side::After => tokens.next(id),
    };

    let mut run: SmallVec<[TokenId; 2]> = SmallVec::new();
    let mut cursor = step(tokens, directive.token);
    while let Some(id) = cursor {
        if tokens[id].kind != TokenKind::WhiteSpace {
            break;
        }
        run.push(id);
        cursor = step(tokens, id);
    }
    let Some(boundary) = cursor else {
        return 0;
    };
    if tokens[boundary].kind == TokenKind::LineBreak {
        return 0;
    }

    let spaces = usize::from(spaces);
    let mut changed = 0;
    match run.split_first() {
        None if spaces > 0 => {
            let token = Token::spaces(spaces);
            match directive.side {
                Side::Before => tokens.insert_before(directive.token, token),
                Side::After => tokens.insert_after(directive.token, token),
            };
            changed += 1;
        }
        None => {}
        Some((&keep, rest)) => {
            for &id in rest {
                tokens.remove(id);
                changed += 1;
            }
            if spaces == 0 {
                tokens.remove(keep);
                changed += 1;
            } else if !is_spaces(&tokens[keep].value, spaces) {
                tokens.set_value(keep, " ".repeat(spaces));
                changed += 1;
            }
        }
    }
    if changed > 0 {
        trace!(
            token = ?directive.token,
            side = ?directive.side,
            rule = %directive.rule,
            spaces,
            "limited whitespace"
        );
    }
    changed
}

fn is_spaces(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b == b' ')
}
