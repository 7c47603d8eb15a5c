use super::*;
use esf_ir::Node;
use pretty_assertions::assert_eq;

struct Parsed {
    tokens: TokenList,
    output: ParseOutput,
}

impl Parsed {
    fn new(source: &str) -> Self {
        let tokens = esf_lexer::tokenize(source).unwrap();
        let output = parse(&tokens).unwrap();
        Parsed { tokens, output }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.output.arena[id]
    }

    /// Source text covered by a node's span, trivia included.
    fn text(&self, id: NodeId) -> String {
        let node = self.node(id);
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

    /// `(kind, text)` of every node, in pre-order.
    fn outline(&self) -> Vec<(NodeKind, String)> {
        self.output
            .arena
            .preorder(self.output.root)
            .into_iter()
            .map(|id| (self.node(id).kind, self.text(id)))
            .collect()
    }

    fn first_of(&self, kind: NodeKind) -> NodeId {
        self.output
            .arena
            .preorder(self.output.root)
            .into_iter()
            .find(|&id| self.node(id).kind == kind)
            .unwrap()
    }
}

fn outline(source: &str) -> Vec<(NodeKind, String)> {
    Parsed::new(source).outline()
}

fn entry(kind: NodeKind, text: &str) -> (NodeKind, String) {
    (kind, text.to_string())
}

#[test]
fn empty_program() {
    let parsed = Parsed::new("  // nothing\n");
    let root = parsed.node(parsed.output.root);
    assert_eq!(root.kind, NodeKind::Program);
    assert!(root.children.is_empty());
    assert_eq!(root.start_token, None);
}

#[test]
fn parenthesized_left_operand_belongs_to_parent_span() {
    use NodeKind::{BinaryExpression, ExpressionStatement, Literal, Program};
    assert_eq!(
        outline("( 1 + 2 ) * 3;"),
        vec![
            entry(Program, "( 1 + 2 ) * 3;"),
            entry(ExpressionStatement, "( 1 + 2 ) * 3;"),
            entry(BinaryExpression, "( 1 + 2 ) * 3"),
            entry(BinaryExpression, "1 + 2"),
            entry(Literal, "1"),
            entry(Literal, "2"),
            entry(Literal, "3"),
        ]
    );
}

#[test]
fn parenthesized_expression_keeps_inner_span() {
    use NodeKind::{ExpressionStatement, Identifier, Program};
    assert_eq!(
        outline("( a );"),
        vec![
            entry(Program, "( a );"),
            entry(ExpressionStatement, "( a );"),
            entry(Identifier, "a"),
        ]
    );
}

#[test]
fn statement_links_expression() {
    let parsed = Parsed::new("x = 1");
    let statement = parsed.first_of(NodeKind::ExpressionStatement);
    let assignment = parsed.first_of(NodeKind::AssignmentExpression);
    assert_eq!(parsed.node(statement).expression, Some(assignment));
    assert_eq!(parsed.text(statement), "x = 1");
}

#[test]
fn call_links_callee() {
    let parsed = Parsed::new("f( 1 )");
    let call = parsed.first_of(NodeKind::CallExpression);
    let callee = parsed.node(call).callee.unwrap();
    assert_eq!(parsed.node(callee).kind, NodeKind::Identifier);
    assert_eq!(parsed.text(call), "f( 1 )");
    assert_eq!(parsed.text(parsed.first_of(NodeKind::Literal)), "1");
}

#[test]
fn immediately_invoked_function() {
    let parsed = Parsed::new("( function () {}() );");
    let statement = parsed.first_of(NodeKind::ExpressionStatement);
    let call = parsed.node(statement).expression.unwrap();
    assert_eq!(parsed.node(call).kind, NodeKind::CallExpression);
    assert_eq!(parsed.text(call), "function () {}()");
    let callee = parsed.node(call).callee.unwrap();
    assert_eq!(parsed.node(callee).kind, NodeKind::FunctionExpression);
}

#[test]
fn arrow_functions() {
    use NodeKind::{ArrowFunctionExpression, CallExpression, Identifier};
    let parsed = Parsed::new("(foo) => bar()");
    let arrow = parsed.first_of(ArrowFunctionExpression);
    assert_eq!(parsed.text(arrow), "(foo) => bar()");
    let kinds: Vec<_> = parsed
        .node(arrow)
        .children
        .iter()
        .map(|&id| parsed.node(id).kind)
        .collect();
    assert_eq!(kinds, vec![Identifier, CallExpression]);

    let parsed = Parsed::new("x => { return x; }");
    assert_eq!(
        parsed.text(parsed.first_of(ArrowFunctionExpression)),
        "x => { return x; }"
    );
}

#[test]
fn precedence_and_associativity() {
    use NodeKind::{BinaryExpression, LogicalExpression};
    let parsed = Parsed::new("a || b && c + d * e ** f ** g");
    let texts: Vec<_> = parsed
        .outline()
        .into_iter()
        .filter(|(kind, _)| matches!(kind, BinaryExpression | LogicalExpression))
        .collect();
    assert_eq!(
        texts,
        vec![
            entry(LogicalExpression, "a || b && c + d * e ** f ** g"),
            entry(LogicalExpression, "b && c + d * e ** f ** g"),
            entry(BinaryExpression, "c + d * e ** f ** g"),
            entry(BinaryExpression, "d * e ** f ** g"),
            entry(BinaryExpression, "e ** f ** g"),
            entry(BinaryExpression, "f ** g"),
        ]
    );
}

#[test]
fn conditional_and_sequence() {
    let parsed = Parsed::new("a ? b : c, d");
    assert_eq!(
        parsed.text(parsed.first_of(NodeKind::SequenceExpression)),
        "a ? b : c, d"
    );
    assert_eq!(
        parsed.text(parsed.first_of(NodeKind::ConditionalExpression)),
        "a ? b : c"
    );
}

#[test]
fn unary_update_and_new() {
    let parsed = Parsed::new("!(a); i++; --j; new Foo.Bar(1);");
    assert_eq!(parsed.text(parsed.first_of(NodeKind::UnaryExpression)), "!(a)");
    assert_eq!(parsed.text(parsed.first_of(NodeKind::UpdateExpression)), "i++");
    let new = parsed.first_of(NodeKind::NewExpression);
    assert_eq!(parsed.text(new), "new Foo.Bar(1)");
    let callee = parsed.node(new).callee.unwrap();
    assert_eq!(parsed.node(callee).kind, NodeKind::MemberExpression);
}

#[test]
fn members_and_optional_chains() {
    let parsed = Parsed::new("a.b[c]?.d?.(e)");
    let call = parsed.first_of(NodeKind::CallExpression);
    assert_eq!(parsed.text(call), "a.b[c]?.d?.(e)");
    let members: Vec<_> = parsed
        .outline()
        .into_iter()
        .filter(|(kind, _)| *kind == NodeKind::MemberExpression)
        .map(|(_, text)| text)
        .collect();
    assert_eq!(members, vec!["a.b[c]?.d", "a.b[c]", "a.b"]);
}

#[test]
fn literals_arrays_and_objects() {
    use NodeKind::{ArrayExpression, Identifier, Literal, ObjectExpression, Property};
    let parsed = Parsed::new("x = [1, , 'two', { a: 1, b, [c]: null, 'd': true }];");
    assert_eq!(
        parsed.text(parsed.first_of(ArrayExpression)),
        "[1, , 'two', { a: 1, b, [c]: null, 'd': true }]"
    );
    let object = parsed.first_of(ObjectExpression);
    assert_eq!(parsed.node(object).children.len(), 4);
    let properties: Vec<_> = parsed
        .outline()
        .into_iter()
        .filter(|(kind, _)| *kind == Property)
        .map(|(_, text)| text)
        .collect();
    assert_eq!(properties, vec!["a: 1", "b", "[c]: null", "'d': true"]);
    let shorthand = parsed.node(object).children[1];
    let key = parsed.node(shorthand).children[0];
    assert_eq!(parsed.node(key).kind, Identifier);
    let quoted = parsed.node(object).children[3];
    assert_eq!(parsed.node(parsed.node(quoted).children[0]).kind, Literal);
}

#[test]
fn statements() {
    use NodeKind::{
        BlockStatement, EmptyStatement, FunctionDeclaration, IfStatement, ReturnStatement,
        VariableDeclaration, VariableDeclarator,
    };
    let parsed = Parsed::new(
        "var a = 1, b;\nfunction f(x) { if (x) { return; } else return x; }\n;",
    );
    assert_eq!(
        parsed.text(parsed.first_of(VariableDeclaration)),
        "var a = 1, b;"
    );
    assert_eq!(parsed.text(parsed.first_of(VariableDeclarator)), "a = 1");
    assert_eq!(
        parsed.text(parsed.first_of(IfStatement)),
        "if (x) { return; } else return x;"
    );
    assert_eq!(parsed.text(parsed.first_of(BlockStatement)), "{ if (x) { return; } else return x; }");
    assert_eq!(parsed.text(parsed.first_of(ReturnStatement)), "return;");
    assert_eq!(parsed.text(parsed.first_of(EmptyStatement)), ";");
    let function = parsed.first_of(FunctionDeclaration);
    assert_eq!(parsed.node(function).children.len(), 3);
}

#[test]
fn comments_do_not_start_or_end_nodes() {
    let parsed = Parsed::new("/* lead */ a + b /* trail */;");
    assert_eq!(
        parsed.text(parsed.first_of(NodeKind::BinaryExpression)),
        "a + b"
    );
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 20_000;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    let parsed = Parsed::new(&source);
    assert_eq!(
        parsed.text(parsed.first_of(NodeKind::Literal)),
        "1"
    );
}

#[test]
fn parens_are_paired_once_up_front() {
    let tokens = esf_lexer::tokenize("(a) (b (c))) (").unwrap();
    let code: Vec<_> = tokens
        .iter()
        .filter(|(_, token)| token.is_code())
        .map(|(id, _)| id)
        .collect();
    let closing = matching_parens(&tokens, &code);
    assert_eq!(closing[0], Some(2));
    assert_eq!(closing[3], Some(8));
    assert_eq!(closing[5], Some(7));
    assert_eq!(closing[10], None);
    assert_eq!(closing[1], None);
}

#[test]
fn arrows_inside_nested_parentheses() {
    use NodeKind::{ArrowFunctionExpression, CallExpression};
    let parsed = Parsed::new("((a, b) => a)(((c)));");
    assert_eq!(
        parsed.text(parsed.first_of(CallExpression)),
        "((a, b) => a)(((c)))"
    );
    assert_eq!(
        parsed.text(parsed.first_of(ArrowFunctionExpression)),
        "(a, b) => a"
    );
}

#[test]
fn errors() {
    let tokens = esf_lexer::tokenize("a + ;").unwrap();
    let err = parse(&tokens).unwrap_err();
    assert_eq!(err.to_string(), "unexpected `;`, expected an expression");
    assert!(err.token().is_some());

    let tokens = esf_lexer::tokenize("f(1").unwrap();
    assert_eq!(
        parse(&tokens).unwrap_err(),
        ParseError::UnexpectedEnd { expected: ")" }
    );
}
