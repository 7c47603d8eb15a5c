//! Which node kinds take whitespace inside their parentheses.
//!
//! A small override table is consulted first. Kinds without an entry
//! inherit the generic rule: expression-like kinds take spacing, except an
//! `ExpressionStatement` whose parentheses really belong to its expression
//! or wrap an immediately invoked function.

use std::sync::OnceLock;

use esf_ir::{NodeArena, NodeId, NodeKind, TokenList};
use rustc_hash::FxHashMap;

use super::parentheses::find_parentheses;
use crate::whitespace::{SpacingRule, WhitespaceLimiter};

/// Interior spacing policy for a node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParenSpacing {
    /// Always apply the configured spacing.
    AlwaysSpace,
    /// Never touch the parentheses around this kind.
    NeverSpace,
    /// Decide from the node itself.
    Inherit,
}

/// Kinds whose policy differs from the generic rule.
static PAREN_SPACING: &[(NodeKind, ParenSpacing)] = &[
    (NodeKind::Literal, ParenSpacing::AlwaysSpace),
    (NodeKind::Special, ParenSpacing::AlwaysSpace),
    (NodeKind::CallExpression, ParenSpacing::NeverSpace),
    (NodeKind::FunctionExpression, ParenSpacing::NeverSpace),
    (NodeKind::ArrayExpression, ParenSpacing::NeverSpace),
    (NodeKind::ObjectExpression, ParenSpacing::NeverSpace),
    (NodeKind::JSXEmptyExpression, ParenSpacing::NeverSpace),
    (NodeKind::JSXExpressionContainer, ParenSpacing::NeverSpace),
];

static PAREN_SPACING_MAP: OnceLock<FxHashMap<NodeKind, ParenSpacing>> = OnceLock::new();

/// Policy for a node kind.
#[inline]
pub fn classify(kind: NodeKind) -> ParenSpacing {
    PAREN_SPACING_MAP
        .get_or_init(|| PAREN_SPACING.iter().copied().collect())
        .get(&kind)
        .copied()
        .unwrap_or(ParenSpacing::Inherit)
}

/// Whether whitespace limits apply inside the parentheses around `node`.
pub fn needs_space_inside(nodes: &NodeArena, node: NodeId) -> bool {
    let Some(data) = nodes.get(node) else {
        return false;
    };
    match classify(data.kind) {
        ParenSpacing::AlwaysSpace => true,
        ParenSpacing::NeverSpace => false,
        ParenSpacing::Inherit => {
            if !data.kind.is_expression_like() {
                return false;
            }
            if data.kind != NodeKind::ExpressionStatement {
                return true;
            }
            let Some(expression) = data.expression.and_then(|id| nodes.get(id)) else {
                return false;
            };
            if data.start_token == expression.start_token {
                return false;
            }
            let is_iife = expression
                .callee
                .and_then(|id| nodes.get(id))
                .is_some_and(|callee| callee.kind == NodeKind::FunctionExpression);
            !is_iife
        }
    }
}

/// Issue whitespace limits just inside the parentheses wrapping `node`.
///
/// Limits the space after the opening parenthesis, then the space before
/// the closing one. Returns whether a pair was found.
pub fn add_space_inside(
    tokens: &TokenList,
    nodes: &NodeArena,
    node: NodeId,
    limiter: &mut impl WhitespaceLimiter,
) -> bool {
    let Some(pair) = find_parentheses(tokens, nodes, node) else {
        return false;
    };
    limiter.limit_after(pair.opening, SpacingRule::ExpressionOpeningParentheses);
    limiter.limit_before(pair.closing, SpacingRule::ExpressionClosingParentheses);
    true
}
