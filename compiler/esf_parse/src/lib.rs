//! esf Parser
//!
//! Recursive descent parser for an ECMAScript subset, producing an
//! ESTree-shaped [`NodeArena`] whose nodes point at their first and last
//! tokens in the source [`TokenList`].
//!
//! # Spans
//!
//! Like ESTree ranges, a node's span covers the code tokens consumed while
//! parsing it. Parentheses around the node itself are discarded (the inner
//! node keeps its own span), but parentheses around a leading or trailing
//! operand are part of the enclosing node's span: in `(a + b) * c` the
//! multiplication starts at `(` while the addition starts at `a`.
//!
//! Whitespace and comments are skipped; they never start or end a node.
//!
//! # Supported Syntax
//!
//! - Statements: `var`/`let`/`const`, function declarations, `return`,
//!   `if`/`else`, blocks, empty and expression statements
//! - Expressions: sequence, assignment, arrow functions, conditional,
//!   logical, binary, unary, update, `new`, call, member, literals,
//!   identifiers, `this`, array, object, function expressions

mod cursor;
mod error;
mod grammar;
mod stack;

pub use error::ParseError;

use esf_ir::{Node, NodeArena, NodeId, NodeKind, TokenId, TokenList};
use tracing::debug;

/// Result of parsing a document.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub arena: NodeArena,
    /// The `Program` node.
    pub root: NodeId,
}

/// Parse a token stream into a syntax tree.
pub fn parse(tokens: &TokenList) -> Result<ParseOutput, ParseError> {
    let mut parser = Parser::new(tokens);
    let root = parser.parse_program()?;
    debug!(nodes = parser.arena.len(), "parsed");
    Ok(ParseOutput {
        arena: parser.arena,
        root,
    })
}

/// Parser state: the code tokens of the stream and a position among them.
pub(crate) struct Parser<'a> {
    tokens: &'a TokenList,
    /// Code tokens in source order; trivia is never seen by the grammar.
    code: Vec<TokenId>,
    /// `closing[i]` is the index in `code` of the `)` matching a `(` at `i`.
    closing: Vec<Option<usize>>,
    pos: usize,
    arena: NodeArena,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenList) -> Self {
        let code: Vec<TokenId> = tokens
            .iter()
            .filter(|(_, token)| token.is_code())
            .map(|(id, _)| id)
            .collect();
        Parser {
            tokens,
            arena: NodeArena::with_capacity(code.len()),
            closing: matching_parens(tokens, &code),
            code,
            pos: 0,
        }
    }

    /// Allocate a node spanning `start` to the last consumed token.
    pub(crate) fn finish(
        &mut self,
        kind: NodeKind,
        start: TokenId,
        children: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        let node = Node::spanning(kind, start, self.last_consumed()).with_children(children);
        self.arena.alloc(node)
    }

    /// Allocate a call-like node (`CallExpression`, `NewExpression`).
    pub(crate) fn finish_call(
        &mut self,
        kind: NodeKind,
        start: TokenId,
        callee: NodeId,
        arguments: Vec<NodeId>,
    ) -> NodeId {
        let node = Node::spanning(kind, start, self.last_consumed())
            .with_callee(callee)
            .with_children(std::iter::once(callee).chain(arguments));
        self.arena.alloc(node)
    }
}

/// Pair every `(` among the code tokens with its `)` in one pass.
fn matching_parens(tokens: &TokenList, code: &[TokenId]) -> Vec<Option<usize>> {
    let mut closing = vec![None; code.len()];
    let mut open = Vec::new();
    for (index, &id) in code.iter().enumerate() {
        let token = &tokens[id];
        if token.is("(") {
            open.push(index);
        } else if token.is(")") {
            if let Some(opening) = open.pop() {
                closing[opening] = Some(index);
            }
        }
    }
    closing
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
