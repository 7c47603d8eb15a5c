//! Statements.

use esf_ir::{Node, NodeId, NodeKind};

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("a statement")?;
        let token = self.token(start);
        match &*token.value {
            "var" | "let" | "const" => self.parse_variable_declaration(),
            "function" => self.parse_function(NodeKind::FunctionDeclaration),
            "return" => self.parse_return(),
            "if" => self.parse_if(),
            "{" => self.parse_block(),
            ";" => {
                self.bump()?;
                Ok(self.finish(NodeKind::EmptyStatement, start, []))
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_expression_statement(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("an expression")?;
        let expression = self.parse_expression()?;
        self.eat(";");
        let node = Node::spanning(NodeKind::ExpressionStatement, start, self.last_consumed())
            .with_expression(expression)
            .with_children([expression]);
        Ok(self.arena.alloc(node))
    }

    fn parse_variable_declaration(&mut self) -> Result<NodeId, ParseError> {
        let start = self.bump()?;
        let mut declarators = Vec::new();
        loop {
            declarators.push(self.parse_declarator()?);
            if !self.eat(",") {
                break;
            }
        }
        self.eat(";");
        Ok(self.finish(NodeKind::VariableDeclaration, start, declarators))
    }

    fn parse_declarator(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start("a binding name")?;
        let id = self.parse_binding_identifier()?;
        let mut children = vec![id];
        if self.eat("=") {
            children.push(self.parse_assignment()?);
        }
        Ok(self.finish(NodeKind::VariableDeclarator, start, children))
    }

    fn parse_return(&mut self) -> Result<NodeId, ParseError> {
        let start = self.expect("return")?;
        let mut children = Vec::new();
        if !self.is_at_end() && !self.check(";") && !self.check("}") {
            children.push(self.parse_expression()?);
        }
        self.eat(";");
        Ok(self.finish(NodeKind::ReturnStatement, start, children))
    }

    fn parse_if(&mut self) -> Result<NodeId, ParseError> {
        let start = self.expect("if")?;
        self.expect("(")?;
        let test = self.parse_expression()?;
        self.expect(")")?;
        let consequent = self.parse_statement()?;
        let mut children = vec![test, consequent];
        if self.eat("else") {
            children.push(self.parse_statement()?);
        }
        Ok(self.finish(NodeKind::IfStatement, start, children))
    }

    pub(crate) fn parse_block(&mut self) -> Result<NodeId, ParseError> {
        let start = self.expect("{")?;
        let mut body = Vec::new();
        while !self.is_at_end() && !self.check("}") {
            body.push(self.parse_statement()?);
        }
        self.expect("}")?;
        Ok(self.finish(NodeKind::BlockStatement, start, body))
    }

    /// `function name? (params) { body }`, as a declaration or expression.
    pub(crate) fn parse_function(&mut self, kind: NodeKind) -> Result<NodeId, ParseError> {
        let start = self.expect("function")?;
        let mut children = Vec::new();
        if kind == NodeKind::FunctionDeclaration || !self.check("(") {
            children.push(self.parse_binding_identifier()?);
        }
        children.extend(self.parse_delimited("(", ")", Parser::parse_assignment)?);
        children.push(self.parse_block()?);
        Ok(self.finish(kind, start, children))
    }
}
