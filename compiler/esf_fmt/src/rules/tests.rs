use super::*;
use crate::whitespace::{Directive, Side, SpacingEdits, SpacingRule};
use esf_ir::{Node, NodeArena, NodeId, NodeKind, Token, TokenId, TokenKind, TokenList};
use pretty_assertions::assert_eq;

struct Fixture {
    tokens: TokenList,
    nodes: NodeArena,
    root: NodeId,
}

impl Fixture {
    fn parse(source: &str) -> Self {
        let tokens = esf_lexer::tokenize(source).unwrap();
        let output = esf_parse::parse(&tokens).unwrap();
        Fixture {
            tokens,
            nodes: output.arena,
            root: output.root,
        }
    }

    fn text(&self, id: NodeId) -> String {
        let node = &self.nodes[id];
        let (Some(start), Some(end)) = (node.start_token, node.end_token) else {
            return String::new();
        };
        let mut text = String::new();
        for (token_id, token) in self.tokens.iter_from(start) {
            text.push_str(&token.value);
            if token_id == end {
                break;
            }
        }
        text
    }

    /// The node of `kind` whose source text is `text`.
    fn node(&self, kind: NodeKind, text: &str) -> NodeId {
        self.nodes
            .preorder(self.root)
            .into_iter()
            .find(|&id| self.nodes[id].kind == kind && self.text(id) == text)
            .unwrap()
    }

    /// The `n`th token (0-based) whose text is `value`.
    fn token(&self, value: &str, n: usize) -> TokenId {
        self.tokens
            .iter()
            .filter(|(_, t)| t.is(value))
            .nth(n)
            .map(|(id, _)| id)
            .unwrap()
    }

    fn pair(&self, opening: usize, closing: usize) -> ParenthesisPair {
        ParenthesisPair {
            opening: self.token("(", opening),
            closing: self.token(")", closing),
        }
    }

    fn find(&self, kind: NodeKind, text: &str) -> Option<ParenthesisPair> {
        find_parentheses(&self.tokens, &self.nodes, self.node(kind, text))
    }

    /// Every node with a located pair, as `(kind, text)`.
    fn wrapped(&self) -> Vec<(NodeKind, String)> {
        self.nodes
            .preorder(self.root)
            .into_iter()
            .filter(|&id| find_parentheses(&self.tokens, &self.nodes, id).is_some())
            .map(|id| (self.nodes[id].kind, self.text(id)))
            .collect()
    }
}

/// `( x )` with a single node of `kind` spanning `x`.
fn wrapped_leaf(kind: NodeKind) -> (TokenList, NodeArena, NodeId) {
    let tokens: TokenList = [
        Token::punct("("),
        Token::spaces(1),
        Token::new(TokenKind::Identifier, "x"),
        Token::spaces(1),
        Token::punct(")"),
    ]
    .into_iter()
    .collect();
    let x = tokens.iter().nth(2).map(|(id, _)| id).unwrap();
    let mut nodes = NodeArena::new();
    let node = nodes.alloc(Node::spanning(kind, x, x));
    (tokens, nodes, node)
}

// Locator

#[test]
fn unparenthesized_nodes_have_no_pair() {
    let fixture = Fixture::parse("a + b * c;");
    assert_eq!(fixture.wrapped(), vec![]);
}

#[test]
fn parenthesized_operand() {
    let fixture = Fixture::parse("( 1 + 2 ) * 3;");
    assert_eq!(
        fixture.find(NodeKind::BinaryExpression, "1 + 2"),
        Some(fixture.pair(0, 0))
    );
    assert_eq!(fixture.find(NodeKind::BinaryExpression, "( 1 + 2 ) * 3"), None);
    assert_eq!(fixture.find(NodeKind::Literal, "1"), None);
    assert_eq!(fixture.find(NodeKind::Literal, "2"), None);
    assert_eq!(
        fixture.wrapped(),
        vec![(NodeKind::BinaryExpression, "1 + 2".to_string())]
    );
}

#[test]
fn pair_is_balanced_across_nested_calls() {
    let fixture = Fixture::parse("(f(a) + g(b, (c))) * 2;");
    let pair = fixture
        .find(NodeKind::BinaryExpression, "f(a) + g(b, (c))")
        .unwrap();
    assert_eq!(pair, fixture.pair(0, 3));
}

#[test]
fn arrow_parameters_are_not_attributed() {
    let fixture = Fixture::parse("(foo) => bar()");
    assert_eq!(
        fixture.find(NodeKind::ArrowFunctionExpression, "(foo) => bar()"),
        None
    );
    assert_eq!(
        locate_parentheses(
            &fixture.tokens,
            &fixture.nodes,
            fixture.node(NodeKind::ArrowFunctionExpression, "(foo) => bar()"),
        ),
        None
    );
    assert_eq!(fixture.wrapped(), vec![]);
}

#[test]
fn leading_operand_parens_are_not_attributed() {
    let fixture = Fixture::parse("(a.b).c;");
    assert_eq!(
        locate_parentheses(
            &fixture.tokens,
            &fixture.nodes,
            fixture.node(NodeKind::MemberExpression, "(a.b).c"),
        ),
        None
    );
    assert_eq!(
        fixture.find(NodeKind::MemberExpression, "a.b"),
        Some(fixture.pair(0, 0))
    );
}

#[test]
fn double_parentheses_match_inner_and_outer() {
    let fixture = Fixture::parse("(( a + b ));");
    assert_eq!(
        fixture.find(NodeKind::BinaryExpression, "a + b"),
        Some(fixture.pair(1, 0))
    );
    assert_eq!(
        fixture.find(NodeKind::ExpressionStatement, "(( a + b ));"),
        Some(fixture.pair(0, 1))
    );
}

#[test]
fn comments_between_paren_and_node_are_skipped() {
    let fixture = Fixture::parse("x = ( /* sum */ 1 + 2 /* end */ );");
    assert_eq!(
        fixture.find(NodeKind::BinaryExpression, "1 + 2"),
        Some(fixture.pair(0, 0))
    );
}

#[test]
fn literal_inside_call_arguments() {
    let fixture = Fixture::parse("f( 1 )");
    assert_eq!(fixture.find(NodeKind::Literal, "1"), Some(fixture.pair(0, 0)));
    assert_eq!(fixture.find(NodeKind::CallExpression, "f( 1 )"), None);
}

#[test]
fn find_is_idempotent() {
    let fixture = Fixture::parse("y = (a || b) && c;");
    let node = fixture.node(NodeKind::LogicalExpression, "a || b");
    let first = find_parentheses(&fixture.tokens, &fixture.nodes, node);
    assert!(first.is_some());
    assert_eq!(find_parentheses(&fixture.tokens, &fixture.nodes, node), first);
}

#[test]
fn unbalanced_stream_has_no_pair() {
    let tokens: TokenList = [Token::punct("("), Token::new(TokenKind::Numeric, "1")]
        .into_iter()
        .collect();
    let one = tokens.last().unwrap();
    let mut nodes = NodeArena::new();
    let node = nodes.alloc(Node::spanning(NodeKind::Literal, one, one));
    assert_eq!(find_parentheses(&tokens, &nodes, node), None);
}

#[test]
fn node_without_tokens_has_no_pair() {
    let tokens = TokenList::new();
    let mut nodes = NodeArena::new();
    let node = nodes.alloc(Node::new(NodeKind::Literal, None, None));
    assert_eq!(find_parentheses(&tokens, &nodes, node), None);
}

// Policy

#[test]
fn table_overrides() {
    for kind in [NodeKind::Literal, NodeKind::Special] {
        assert_eq!(classify(kind), ParenSpacing::AlwaysSpace, "{kind}");
    }
    for kind in [
        NodeKind::CallExpression,
        NodeKind::FunctionExpression,
        NodeKind::ArrayExpression,
        NodeKind::ObjectExpression,
        NodeKind::JSXEmptyExpression,
        NodeKind::JSXExpressionContainer,
    ] {
        assert_eq!(classify(kind), ParenSpacing::NeverSpace, "{kind}");
    }
    assert_eq!(classify(NodeKind::BinaryExpression), ParenSpacing::Inherit);
    assert_eq!(classify(NodeKind::Identifier), ParenSpacing::Inherit);
}

#[test]
fn inherit_follows_expression_likeness() {
    for kind in NodeKind::ALL {
        if kind == NodeKind::ExpressionStatement || classify(kind) != ParenSpacing::Inherit {
            continue;
        }
        let (_, nodes, node) = wrapped_leaf(kind);
        assert_eq!(
            needs_space_inside(&nodes, node),
            kind.is_expression_like(),
            "{kind}"
        );
    }
}

#[test]
fn special_and_literal_always_apply() {
    for kind in [NodeKind::Special, NodeKind::Literal] {
        let (tokens, nodes, node) = wrapped_leaf(kind);
        assert!(needs_space_inside(&nodes, node));
        let pair = find_parentheses(&tokens, &nodes, node).unwrap();
        assert_eq!(pair.opening, tokens.first().unwrap());
        assert_eq!(pair.closing, tokens.last().unwrap());
    }
}

#[test]
fn never_space_kinds_are_not_applicable() {
    for kind in [
        NodeKind::JSXEmptyExpression,
        NodeKind::JSXExpressionContainer,
        NodeKind::CallExpression,
        NodeKind::ObjectExpression,
    ] {
        let (tokens, nodes, node) = wrapped_leaf(kind);
        assert!(!needs_space_inside(&nodes, node), "{kind}");
        assert_eq!(find_parentheses(&tokens, &nodes, node), None, "{kind}");
        assert!(locate_parentheses(&tokens, &nodes, node).is_some(), "{kind}");
    }
}

#[test]
fn statement_sharing_start_with_expression() {
    let fixture = Fixture::parse("a + b;");
    let statement = fixture.node(NodeKind::ExpressionStatement, "a + b;");
    assert!(!needs_space_inside(&fixture.nodes, statement));
}

#[test]
fn statement_wrapping_parenthesized_expression() {
    let fixture = Fixture::parse("( a );");
    let statement = fixture.node(NodeKind::ExpressionStatement, "( a );");
    assert!(needs_space_inside(&fixture.nodes, statement));
    assert_eq!(
        find_parentheses(&fixture.tokens, &fixture.nodes, statement),
        Some(fixture.pair(0, 0))
    );
}

#[test]
fn statement_wrapping_iife() {
    let fixture = Fixture::parse("( function () {}() );");
    let statement = fixture.node(NodeKind::ExpressionStatement, "( function () {}() );");
    assert!(!needs_space_inside(&fixture.nodes, statement));
    assert_eq!(fixture.wrapped(), vec![]);
}

#[test]
fn statement_without_expression_is_not_applicable() {
    let tokens: TokenList = [Token::punct(";")].into_iter().collect();
    let semi = tokens.first().unwrap();
    let mut nodes = NodeArena::new();
    let node = nodes.alloc(Node::spanning(NodeKind::ExpressionStatement, semi, semi));
    assert!(!needs_space_inside(&nodes, node));
}

// add_space_inside

#[test]
fn add_space_inside_issues_opening_then_closing() {
    let fixture = Fixture::parse("x = (1);");
    let literal = fixture.node(NodeKind::Literal, "1");
    let mut edits = SpacingEdits::new();
    assert!(add_space_inside(
        &fixture.tokens,
        &fixture.nodes,
        literal,
        &mut edits
    ));
    assert_eq!(
        edits.directives(),
        &[
            Directive {
                token: fixture.token("(", 0),
                side: Side::After,
                rule: SpacingRule::ExpressionOpeningParentheses,
            },
            Directive {
                token: fixture.token(")", 0),
                side: Side::Before,
                rule: SpacingRule::ExpressionClosingParentheses,
            },
        ]
    );
}

#[test]
fn add_space_inside_without_parens_issues_nothing() {
    let fixture = Fixture::parse("x = 1 + 2;");
    let mut edits = SpacingEdits::new();
    for id in fixture.nodes.preorder(fixture.root) {
        assert!(!add_space_inside(
            &fixture.tokens,
            &fixture.nodes,
            id,
            &mut edits
        ));
    }
    assert!(edits.is_empty());
}
