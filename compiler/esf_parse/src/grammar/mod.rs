//! Grammar productions.
//!
//! Each production starts at the current code token and leaves the cursor
//! after the last token it consumed. Nodes are allocated bottom-up.

mod expr;
mod primary;
mod stmt;

use esf_ir::{Node, NodeId, NodeKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse the whole token stream as a `Program`.
    pub(crate) fn parse_program(&mut self) -> Result<NodeId, ParseError> {
        let mut body = Vec::new();
        while !self.is_at_end() {
            body.push(self.parse_statement()?);
        }
        let node = Node::new(
            NodeKind::Program,
            self.code.first().copied(),
            self.code.last().copied(),
        )
        .with_children(body);
        Ok(self.arena.alloc(node))
    }

    /// Parse a comma-separated list up to `close`, consuming both
    /// delimiters. A trailing comma is accepted.
    pub(crate) fn parse_delimited(
        &mut self,
        open: &'static str,
        close: &'static str,
        mut item: impl FnMut(&mut Self) -> Result<NodeId, ParseError>,
    ) -> Result<Vec<NodeId>, ParseError> {
        self.expect(open)?;
        let mut items = Vec::new();
        while !self.check(close) {
            items.push(item(self)?);
            if !self.eat(",") {
                break;
            }
        }
        self.expect(close)?;
        Ok(items)
    }
}
