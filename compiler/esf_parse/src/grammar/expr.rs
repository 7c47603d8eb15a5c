//! Expressions, from sequence down to unary.
//!
//! Binary operators use precedence climbing over the table in
//! [`binary_operator`]. Every production records the current token at
//! entry as its start, so an operand's enclosing parentheses belong to the
//! enclosing node's span.

use esf_ir::{NodeId, NodeKind, Token, TokenKind};

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

/// Precedence of `**`, the only right-associative binary operator.
const EXPONENT: u8 = 12;

const ASSIGNMENT_OPERATORS: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "**=", "<<=", ">>=", ">>>=", "&=", "|=", "^=", "&&=",
    "||=", "??=",
];

/// Binding power and node kind of a binary operator token.
fn binary_operator(token: &Token) -> Option<(u8, NodeKind)> {
    if !matches!(token.kind, TokenKind::Punctuator | TokenKind::Keyword) {
        return None;
    }
    let entry = match &*token.value {
        "??" => (1, NodeKind::LogicalExpression),
        "||" => (2, NodeKind::LogicalExpression),
        "&&" => (3, NodeKind::LogicalExpression),
        "|" => (4, NodeKind::BinaryExpression),
        "^" => (5, NodeKind::BinaryExpression),
        "&" => (6, NodeKind::BinaryExpression),
        "==" | "!=" | "===" | "!==" => (7, NodeKind::BinaryExpression),
        "<" | ">" | "<=" | ">=" | "instanceof" | "in" => (8, NodeKind::BinaryExpression),
        "<<" | ">>" | ">>>" => (9, NodeKind::BinaryExpression),
        "+" | "-" => (10, NodeKind::BinaryExpression),
        "*" | "/" | "%" => (11, NodeKind::BinaryExpression),
        "**" => (EXPONENT, NodeKind::BinaryExpression),
        _ => return None,
    };
    Some(entry)
}

fn is_unary_operator(token: &Token) -> bool {
    matches!(
        &*token.value,
        "!" | "-" | "+" | "~" | "typeof" | "void" | "delete"
    ) && matches!(token.kind, TokenKind::Punctuator | TokenKind::Keyword)
}

impl Parser<'_> {
    /// `a, b, c`
    pub(crate) fn parse_expression(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("an expression")?;
        let first = self.parse_assignment()?;
        if !self.check(",") {
            return Ok(first);
        }
        let mut expressions = vec![first];
        while self.eat(",") {
            expressions.push(self.parse_assignment()?);
        }
        Ok(self.finish(NodeKind::SequenceExpression, start, expressions))
    }

    pub(crate) fn parse_assignment(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment_inner())
    }

    fn parse_assignment_inner(&mut self) -> Result<NodeId, ParseError> {
        if self.at_arrow() {
            return self.parse_arrow();
        }
        let start = self.start("an expression")?;
        let left = self.parse_conditional()?;
        let is_assignment = self.current_token().is_some_and(|t| {
            t.kind == TokenKind::Punctuator && ASSIGNMENT_OPERATORS.contains(&&*t.value)
        });
        if !is_assignment {
            return Ok(left);
        }
        self.bump()?;
        let right = self.parse_assignment()?;
        Ok(self.finish(NodeKind::AssignmentExpression, start, [left, right]))
    }

    /// Whether the cursor sits on `x =>` or `( ... ) =>`.
    fn at_arrow(&self) -> bool {
        let Some(token) = self.current_token() else {
            return false;
        };
        if token.kind == TokenKind::Identifier {
            return self.peek_is(1, "=>");
        }
        if !token.is("(") {
            return false;
        }
        self.closing
            .get(self.pos)
            .copied()
            .flatten()
            .is_some_and(|close| self.peek_is(close - self.pos + 1, "=>"))
    }

    fn parse_arrow(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("arrow parameters")?;
        let mut children = if self.check("(") {
            self.parse_delimited("(", ")", Parser::parse_assignment)?
        } else {
            vec![self.parse_binding_identifier()?]
        };
        self.expect("=>")?;
        let body = if self.check("{") {
            self.parse_block()?
        } else {
            self.parse_assignment()?
        };
        children.push(body);
        Ok(self.finish(NodeKind::ArrowFunctionExpression, start, children))
    }

    /// `test ? consequent : alternate`
    fn parse_conditional(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("an expression")?;
        let test = self.parse_binary(1)?;
        if !self.eat("?") {
            return Ok(test);
        }
        let consequent = self.parse_assignment()?;
        self.expect(":")?;
        let alternate = self.parse_assignment()?;
        Ok(self.finish(
            NodeKind::ConditionalExpression,
            start,
            [test, consequent, alternate],
        ))
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<NodeId, ParseError> {
        let start = self.start("an expression")?;
        let mut left = self.parse_unary()?;
        while let Some((precedence, kind)) = self.current_token().and_then(binary_operator) {
            if precedence < min_precedence {
                break;
            }
            self.bump()?;
            let next = if precedence == EXPONENT {
                precedence
            } else {
                precedence + 1
            };
            let right = self.parse_binary(next)?;
            left = self.finish(kind, start, [left, right]);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| self.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("an expression")?;
        let token = self.token(start);
        if is_unary_operator(token) {
            self.bump()?;
            let argument = self.parse_unary()?;
            return Ok(self.finish(NodeKind::UnaryExpression, start, [argument]));
        }
        if token.is("++") || token.is("--") {
            self.bump()?;
            let argument = self.parse_unary()?;
            return Ok(self.finish(NodeKind::UpdateExpression, start, [argument]));
        }
        let operand = self.parse_call_member()?;
        if self.check("++") || self.check("--") {
            self.bump()?;
            return Ok(self.finish(NodeKind::UpdateExpression, start, [operand]));
        }
        Ok(operand)
    }
}
