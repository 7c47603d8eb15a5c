//! Syntax node kinds.

use std::fmt;

/// Kind of a syntax node.
///
/// Variant names are the ESTree type names. The set is closed: properties
/// that formatting rules key off (such as "is this an expression") are
/// answered per variant instead of by inspecting the name at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Program and statements
    Program,
    ExpressionStatement,
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    ReturnStatement,
    IfStatement,
    BlockStatement,
    EmptyStatement,

    // Leaves
    Identifier,
    Literal,
    ThisExpression,

    // Compound expressions
    ArrayExpression,
    ObjectExpression,
    Property,
    FunctionExpression,
    ArrowFunctionExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    SequenceExpression,

    // JSX placeholders (never produced by the esf parser, but classified)
    JSXEmptyExpression,
    JSXExpressionContainer,

    /// Synthetic kind used by formatting rules to force expression
    /// parenthesis spacing on an arbitrary span.
    Special,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 30] = [
        NodeKind::Program,
        NodeKind::ExpressionStatement,
        NodeKind::VariableDeclaration,
        NodeKind::VariableDeclarator,
        NodeKind::FunctionDeclaration,
        NodeKind::ReturnStatement,
        NodeKind::IfStatement,
        NodeKind::BlockStatement,
        NodeKind::EmptyStatement,
        NodeKind::Identifier,
        NodeKind::Literal,
        NodeKind::ThisExpression,
        NodeKind::ArrayExpression,
        NodeKind::ObjectExpression,
        NodeKind::Property,
        NodeKind::FunctionExpression,
        NodeKind::ArrowFunctionExpression,
        NodeKind::UnaryExpression,
        NodeKind::UpdateExpression,
        NodeKind::BinaryExpression,
        NodeKind::LogicalExpression,
        NodeKind::AssignmentExpression,
        NodeKind::ConditionalExpression,
        NodeKind::CallExpression,
        NodeKind::NewExpression,
        NodeKind::MemberExpression,
        NodeKind::SequenceExpression,
        NodeKind::JSXEmptyExpression,
        NodeKind::JSXExpressionContainer,
        NodeKind::Special,
    ];

    /// ESTree type name.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::Identifier => "Identifier",
            NodeKind::Literal => "Literal",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::ArrayExpression => "ArrayExpression",
            NodeKind::ObjectExpression => "ObjectExpression",
            NodeKind::Property => "Property",
            NodeKind::FunctionExpression => "FunctionExpression",
            NodeKind::ArrowFunctionExpression => "ArrowFunctionExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::UpdateExpression => "UpdateExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::LogicalExpression => "LogicalExpression",
            NodeKind::AssignmentExpression => "AssignmentExpression",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::NewExpression => "NewExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::SequenceExpression => "SequenceExpression",
            NodeKind::JSXEmptyExpression => "JSXEmptyExpression",
            NodeKind::JSXExpressionContainer => "JSXExpressionContainer",
            NodeKind::Special => "Special",
        }
    }

    /// Expression-like kinds: every `*Expression` kind plus
    /// `ExpressionStatement`.
    ///
    /// `Identifier` and `Literal` are expressions in the grammar but are not
    /// expression-like here.
    pub const fn is_expression_like(self) -> bool {
        matches!(
            self,
            NodeKind::ExpressionStatement
                | NodeKind::ThisExpression
                | NodeKind::ArrayExpression
                | NodeKind::ObjectExpression
                | NodeKind::FunctionExpression
                | NodeKind::ArrowFunctionExpression
                | NodeKind::UnaryExpression
                | NodeKind::UpdateExpression
                | NodeKind::BinaryExpression
                | NodeKind::LogicalExpression
                | NodeKind::AssignmentExpression
                | NodeKind::ConditionalExpression
                | NodeKind::CallExpression
                | NodeKind::NewExpression
                | NodeKind::MemberExpression
                | NodeKind::SequenceExpression
                | NodeKind::JSXEmptyExpression
                | NodeKind::JSXExpressionContainer
        )
    }

    /// Binary and logical expressions: their first token is an operand, so
    /// any wrapping parenthesis lies strictly before it.
    #[inline]
    pub const fn is_binary_like(self) -> bool {
        matches!(
            self,
            NodeKind::BinaryExpression | NodeKind::LogicalExpression
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
