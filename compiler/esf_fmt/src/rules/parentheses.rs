//! Locating the parentheses that wrap an expression.
//!
//! # Algorithm
//!
//! 1. The candidate opening is the node's first token, or the code token
//!    just before it when the node is binary-like (its first token may be
//!    the `(` of its left operand) or does not start with `(`.
//! 2. Scan forward from the candidate counting depth; the first token that
//!    brings depth back to zero is the candidate closing.
//! 3. Accept only when the closing parenthesis sits at the node's end: it is
//!    the end token, or the code token on either side of it is.
//!
//! Step 3 rejects pairs that belong to another construct, such as the
//! parameter list in `(foo) => bar()`.

use esf_ir::{NodeArena, NodeId, TokenId, TokenList};
use tracing::debug;

use super::classification::needs_space_inside;

/// Matching parentheses around a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParenthesisPair {
    pub opening: TokenId,
    pub closing: TokenId,
}

/// Find the parentheses wrapping `node`, if the node takes interior
/// spacing at all.
///
/// Returns `None` for nodes [`needs_space_inside`] rejects.
pub fn find_parentheses(
    tokens: &TokenList,
    nodes: &NodeArena,
    node: NodeId,
) -> Option<ParenthesisPair> {
    if !needs_space_inside(nodes, node) {
        debug!(?node, "not applicable");
        return None;
    }
    locate_parentheses(tokens, nodes, node)
}

/// Find the parentheses wrapping `node` regardless of its kind.
pub fn locate_parentheses(
    tokens: &TokenList,
    nodes: &NodeArena,
    node: NodeId,
) -> Option<ParenthesisPair> {
    let data = nodes.get(node)?;
    let kind = data.kind;
    let (Some(start), Some(end)) = (data.start_token, data.end_token) else {
        debug!(%kind, "no token span");
        return None;
    };

    let starts_with_paren = tokens.get(start).is_some_and(|t| t.is("("));
    let candidate = if kind.is_binary_like() || !starts_with_paren {
        tokens.find_prev_code(start)
    } else {
        Some(start)
    };
    let Some(opening) = candidate.filter(|&id| tokens[id].is("(")) else {
        debug!(%kind, "no opening parenthesis");
        return None;
    };

    let Some(closing) = matching_close(tokens, opening) else {
        debug!(%kind, "unbalanced parentheses");
        return None;
    };

    let encloses = closing == end
        || tokens.find_prev_code(closing) == Some(end)
        || tokens.find_next_code(closing) == Some(end);
    if !encloses {
        debug!(%kind, ?opening, ?closing, "parentheses do not enclose node");
        return None;
    }

    Some(ParenthesisPair { opening, closing })
}

/// First token after `opening` where parenthesis depth returns to zero.
fn matching_close(tokens: &TokenList, opening: TokenId) -> Option<TokenId> {
    let mut depth: i64 = 0;
    for (id, token) in tokens.iter_from(opening) {
        if token.is("(") {
            depth += 1;
        } else if token.is(")") {
            depth -= 1;
        }
        if depth == 0 {
            return Some(id);
        }
    }
    None
}
