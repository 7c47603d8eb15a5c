//! Call, member, `new` and primary expressions.

use esf_ir::{NodeId, NodeKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Primary expression followed by any chain of `.x`, `?.x`, `[x]` and
    /// `(args)`.
    pub(crate) fn parse_call_member(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("an expression")?;
        let mut object = if self.check("new") {
            self.parse_new()?
        } else {
            self.parse_primary()?
        };
        loop {
            if self.check("(") {
                let arguments = self.parse_arguments()?;
                object = self.finish_call(NodeKind::CallExpression, start, object, arguments);
            } else if self.eat("?.") {
                if self.check("(") {
                    let arguments = self.parse_arguments()?;
                    object = self.finish_call(NodeKind::CallExpression, start, object, arguments);
                } else if self.check("[") {
                    object = self.parse_computed_member(start, object)?;
                } else {
                    let property = self.parse_property_name()?;
                    object = self.finish(NodeKind::MemberExpression, start, [object, property]);
                }
            } else if self.eat(".") {
                let property = self.parse_property_name()?;
                object = self.finish(NodeKind::MemberExpression, start, [object, property]);
            } else if self.check("[") {
                object = self.parse_computed_member(start, object)?;
            } else {
                return Ok(object);
            }
        }
    }

    /// `new Callee(args)`; the argument list is optional.
    fn parse_new(&mut self) -> Result<NodeId, ParseError> {
        let start = self.expect("new")?;
        let callee_start = self.start("a constructor")?;
        let mut callee = if self.check("new") {
            self.parse_new()?
        } else {
            self.parse_primary()?
        };
        loop {
            if self.eat(".") {
                let property = self.parse_property_name()?;
                callee = self.finish(NodeKind::MemberExpression, callee_start, [callee, property]);
            } else if self.check("[") {
                callee = self.parse_computed_member(callee_start, callee)?;
            } else {
                break;
            }
        }
        let arguments = if self.check("(") {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        Ok(self.finish_call(NodeKind::NewExpression, start, callee, arguments))
    }

    fn parse_arguments(&mut self) -> Result<Vec<NodeId>, ParseError> {
        self.parse_delimited("(", ")", Parser::parse_assignment)
    }

    fn parse_computed_member(
        &mut self,
        start: esf_ir::TokenId,
        object: NodeId,
    ) -> Result<NodeId, ParseError> {
        self.expect("[")?;
        let property = self.parse_expression()?;
        self.expect("]")?;
        Ok(self.finish(NodeKind::MemberExpression, start, [object, property]))
    }

    /// Name after `.`; reserved words are allowed.
    fn parse_property_name(&mut self) -> Result<NodeId, ParseError> {
        let token = self.start("a property name")?;
        match self.token(token).kind {
            TokenKind::Identifier
            | TokenKind::Keyword
            | TokenKind::Boolean
            | TokenKind::Null => {
                self.bump()?;
                Ok(self.finish(NodeKind::Identifier, token, []))
            }
            _ => Err(self.unexpected("a property name")),
        }
    }

    pub(crate) fn parse_binding_identifier(&mut self) -> Result<NodeId, ParseError> {
        let token = self.start("an identifier")?;
        if self.token(token).kind != TokenKind::Identifier {
            return Err(self.unexpected("an identifier"));
        }
        self.bump()?;
        Ok(self.finish(NodeKind::Identifier, token, []))
    }

    fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("an expression")?;
        let token = self.token(start);
        match token.kind {
            TokenKind::Numeric | TokenKind::String | TokenKind::Boolean | TokenKind::Null => {
                self.bump()?;
                Ok(self.finish(NodeKind::Literal, start, []))
            }
            TokenKind::Identifier => {
                self.bump()?;
                Ok(self.finish(NodeKind::Identifier, start, []))
            }
            TokenKind::Keyword if token.is("this") => {
                self.bump()?;
                Ok(self.finish(NodeKind::ThisExpression, start, []))
            }
            TokenKind::Keyword if token.is("function") => {
                self.parse_function(NodeKind::FunctionExpression)
            }
            TokenKind::Punctuator if token.is("(") => {
                self.bump()?;
                let inner = self.parse_expression()?;
                self.expect(")")?;
                Ok(inner)
            }
            TokenKind::Punctuator if token.is("[") => self.parse_array(),
            TokenKind::Punctuator if token.is("{") => self.parse_object(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `[a, , b]`; holes produce no child.
    fn parse_array(&mut self) -> Result<NodeId, ParseError> {
        let start = self.expect("[")?;
        let mut elements = Vec::new();
        while !self.check("]") {
            if self.eat(",") {
                continue;
            }
            elements.push(self.parse_assignment()?);
            if !self.eat(",") {
                break;
            }
        }
        self.expect("]")?;
        Ok(self.finish(NodeKind::ArrayExpression, start, elements))
    }

    fn parse_object(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("an object")?;
        let properties = self.parse_delimited("{", "}", Parser::parse_property)?;
        Ok(self.finish(NodeKind::ObjectExpression, start, properties))
    }

    /// `key: value`, `[key]: value` or shorthand `key`.
    fn parse_property(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("a property")?;
        let key = if self.eat("[") {
            let key = self.parse_assignment()?;
            self.expect("]")?;
            key
        } else {
            match self.token(start).kind {
                TokenKind::String | TokenKind::Numeric => {
                    self.bump()?;
                    self.finish(NodeKind::Literal, start, [])
                }
                _ => self.parse_property_name()?,
            }
        };
        let mut children = vec![key];
        if self.eat(":") {
            children.push(self.parse_assignment()?);
        }
        Ok(self.finish(NodeKind::Property, start, children))
    }
}
