//! Tests for expression parsing.

use crate::{Parser, ParserOptions};
use sparrow_ast::{
    expression::{AssignmentTarget, Expression},
    function::ArrowFunctionBody,
    pattern::Pattern,
    statement::Statement,
    BinaryOp, LogicalOp, Program,
};

fn parse(src: &str) -> Program {
    Parser::new(src)
        .parse()
        .unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

fn check_invalid(src: &str) {
    assert!(
        Parser::new(src).parse().is_err(),
        "expected an error for {src:?}"
    );
}

/// The expression of the only statement of the program.
fn first_expression(program: &Program) -> &Expression {
    match &program.body[0] {
        Statement::Expression(stmt) => &stmt.expression,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn binary_precedence_nesting() {
    let program = parse("a + b * c;");
    let Expression::Binary(add) = first_expression(&program) else {
        panic!("expected a binary expression")
    };
    assert_eq!(add.operator, BinaryOp::Add);
    let Expression::Binary(mul) = &add.right else {
        panic!("expected the multiplication on the right")
    };
    assert_eq!(mul.operator, BinaryOp::Mul);
}

#[test]
fn parenthesized_nesting_overrides_precedence() {
    let program = parse("(a + b) * c;");
    let Expression::Binary(mul) = first_expression(&program) else {
        panic!("expected a binary expression")
    };
    assert_eq!(mul.operator, BinaryOp::Mul);
    let Expression::Binary(add) = &mul.left else {
        panic!("expected the addition on the left")
    };
    assert_eq!(add.operator, BinaryOp::Add);
}

#[test]
fn exponent_is_right_associative() {
    let program = parse("a ** b ** c;");
    let Expression::Binary(outer) = first_expression(&program) else {
        panic!("expected a binary expression")
    };
    assert!(matches!(outer.left, Expression::Identifier(_)));
    assert!(matches!(&outer.right, Expression::Binary(inner) if inner.operator == BinaryOp::Exp));
}

#[test]
fn unary_operand_of_exponent_requires_parens() {
    check_invalid("-a ** b;");
    check_invalid("typeof a ** b;");
    let program = parse("(-a) ** b;");
    let Expression::Binary(exp) = first_expression(&program) else {
        panic!("expected a binary expression")
    };
    assert_eq!(exp.operator, BinaryOp::Exp);
    // `-(a ** b)` stays legal: the unary applies to the whole power.
    parse("-(a ** b);");
}

#[test]
fn coalesce_and_logical_do_not_mix() {
    check_invalid("a ?? b || c;");
    check_invalid("a || b ?? c;");
    check_invalid("a && b ?? c;");

    let program = parse("(a ?? b) || c;");
    let Expression::Logical(or) = first_expression(&program) else {
        panic!("expected a logical expression")
    };
    assert_eq!(or.operator, LogicalOp::Or);

    let program = parse("a ?? (b || c);");
    let Expression::Logical(coalesce) = first_expression(&program) else {
        panic!("expected a logical expression")
    };
    assert_eq!(coalesce.operator, LogicalOp::Coalesce);

    parse("a ?? b ?? c;");
    parse("a || b && c;");
}

#[test]
fn optional_chain_wraps_in_chain_expression() {
    let program = parse("a?.b.c;");
    let Expression::Chain(chain) = first_expression(&program) else {
        panic!("expected a chain expression")
    };
    let Expression::Member(outer) = &chain.expression else {
        panic!("expected a member expression inside the chain")
    };
    assert!(!outer.optional);
    assert!(matches!(&outer.object, Expression::Member(inner) if inner.optional));

    // A plain member chain is not wrapped.
    let program = parse("a.b.c;");
    assert!(matches!(first_expression(&program), Expression::Member(_)));
}

#[test]
fn optional_call_and_index() {
    let program = parse("a?.(1)?.[0];");
    assert!(matches!(first_expression(&program), Expression::Chain(_)));
}

#[test]
fn tagged_template_rejected_in_optional_chain() {
    check_invalid("a?.`tpl`;");
    check_invalid("a?.b`tpl`;");
    parse("a.b`tpl`;");
}

#[test]
fn super_outside_class_is_rejected() {
    check_invalid("super.x;");
    check_invalid("super();");
    check_invalid("function f() { super.x; }");
}

#[test]
fn new_expressions() {
    let program = parse("new a.b(1);");
    let Expression::New(new) = first_expression(&program) else {
        panic!("expected a new expression")
    };
    assert!(matches!(new.callee, Expression::Member(_)));
    assert_eq!(new.arguments.len(), 1);

    parse("new new a()();");
    parse("new a;");
    check_invalid("new a?.b;");
}

#[test]
fn new_target_only_inside_functions() {
    parse("function f() { return new.target; }");
    check_invalid("new.target;");
}

#[test]
fn import_meta_only_in_modules() {
    let program = Parser::with_options("import.meta.url;", ParserOptions::module())
        .parse()
        .expect("import.meta should parse in modules");
    assert_eq!(program.body.len(), 1);
    check_invalid("import.meta;");
}

#[test]
fn dynamic_import() {
    parse("import('mod');");
    parse("import('mod', { with: { type: 'json' } });");
    check_invalid("import();");
}

#[test]
fn arrow_functions() {
    let program = parse("x => x + 1;");
    let Expression::ArrowFunction(arrow) = first_expression(&program) else {
        panic!("expected an arrow function")
    };
    assert!(matches!(arrow.body, ArrowFunctionBody::Expression(_)));
    assert_eq!(arrow.params.len(), 1);

    parse("() => {};");
    parse("(a, b = 1, ...rest) => a + b;");
    parse("async x => await x;");
    parse("async (a) => await a;");
    // `async(a)` without an arrow is a call.
    let program = parse("async(a);");
    assert!(matches!(first_expression(&program), Expression::Call(_)));
}

#[test]
fn arrow_needs_same_line_arrow_token() {
    // A line terminator before `=>` breaks the arrow head.
    check_invalid("(a, b)\n=> a;");
}

#[test]
fn arrow_block_body_asi_before_call() {
    // The call parens on the next line do not attach to the arrow body.
    let program = parse("let f = () => {}\n(0);");
    assert_eq!(program.body.len(), 2);
}

#[test]
fn await_as_identifier_outside_async() {
    let program = parse("await;");
    assert!(matches!(
        first_expression(&program),
        Expression::Identifier(ident) if &*ident.name == "await"
    ));
    check_invalid("async function f() { let await; }");
    assert!(Parser::with_options("await;", ParserOptions::module())
        .parse()
        .is_err());
}

#[test]
fn top_level_await_in_modules() {
    Parser::with_options("await fetch('x');", ParserOptions::module())
        .parse()
        .expect("top-level await should parse in modules");
    // In a sloppy script function `await` is only an identifier, so an
    // operand after it cannot parse.
    check_invalid("function f() { await x; }");
}

#[test]
fn yield_forms_in_generators() {
    parse("function* g() { yield; yield 1; yield* inner(); }");
    // In sloppy non-generator code `yield` is an identifier.
    parse("var yield = 1;");
    check_invalid("'use strict'; var yield = 1;");
    check_invalid("function* g(a = yield 1) {}");
}

#[test]
fn update_expression_targets() {
    parse("a++;");
    parse("--a.b;");
    check_invalid("a + b++ ++;");
    check_invalid("(a + b)++;");
    check_invalid("++1;");
}

#[test]
fn postfix_update_respects_line_terminator() {
    let program = parse("a\n++b;");
    assert_eq!(program.body.len(), 2, "ASI should split the statements");
}

#[test]
fn delete_restrictions() {
    parse("delete a.b;");
    parse("delete a;");
    check_invalid("'use strict'; delete a;");
    check_invalid("class A { #x; m() { delete this.#x; } }");
}

#[test]
fn destructuring_assignment_converts_left_side() {
    let program = parse("({a} = x);");
    let Expression::Assignment(assignment) = first_expression(&program) else {
        panic!("expected an assignment")
    };
    assert!(matches!(
        assignment.left,
        AssignmentTarget::Pattern(Pattern::Object(_))
    ));

    let program = parse("[a, ...rest] = x;");
    let Expression::Assignment(assignment) = first_expression(&program) else {
        panic!("expected an assignment")
    };
    assert!(matches!(
        assignment.left,
        AssignmentTarget::Pattern(Pattern::Array(_))
    ));
}

#[test]
fn parenthesized_pattern_is_not_a_target() {
    check_invalid("({a}) = x;");
    check_invalid("([a]) = x;");
    parse("({a} = x);");
}

#[test]
fn invalid_assignment_targets() {
    check_invalid("1 = x;");
    check_invalid("a + b = c;");
    check_invalid("f() = 1;");
    check_invalid("({a} += x);");
    check_invalid("'use strict'; eval = 1;");
}

#[test]
fn shorthand_initializer_needs_destructuring() {
    check_invalid("({x = 1});");
    check_invalid("f({x = 1});");
    parse("({x = 1} = y);");
    parse("for ({x = 1} of list);");
}

#[test]
fn duplicate_proto_in_literal() {
    check_invalid("({__proto__: 1, __proto__: 2});");
    check_invalid("({__proto__: 1, '__proto__': 2});");
    // Shorthand and methods do not set the prototype.
    parse("({__proto__: 1, ['__proto__']: 2});");
    parse("({__proto__, __proto__: 1});");
    // As a destructuring pattern the restriction vanishes.
    parse("({__proto__: a, __proto__: b} = x);");
}

#[test]
fn rest_element_restrictions() {
    check_invalid("[...a, b] = x;");
    check_invalid("[...a,] = x;");
    check_invalid("[...a = 1] = x;");
    check_invalid("({...a, b} = x);");
    parse("[...a] = x;");
    parse("({...a} = x);");
}

#[test]
fn object_literal_methods() {
    parse("({ m() {}, get x() { return 1; }, set x(v) {}, async a() {}, *g() {}, async *ag() {} });");
    check_invalid("({ get x(a) {} });");
    check_invalid("({ set x() {} });");
    check_invalid("({ set x(...v) {} });");
    check_invalid("({ get x() {} } = y);");
}

#[test]
fn private_name_in_expression() {
    parse("class A { #x; m() { return #x in this; } }");
    check_invalid("class A { m() { return #x; } }");
    check_invalid("class A { #x; #y; m() { #x in #y; } }");
    check_invalid("class A { #x; m() { #x in () => {}; } }");
    parse("class A { #x; m() { return #x in (() => {}); } }");
}

#[test]
fn sequence_expressions() {
    let program = parse("a, b, c;");
    let Expression::Sequence(sequence) = first_expression(&program) else {
        panic!("expected a sequence expression")
    };
    assert_eq!(sequence.expressions.len(), 3);
}

#[test]
fn conditional_expressions() {
    parse("a ? b : c;");
    parse("a ? b ? c : d : e;");
    check_invalid("a ? b;");
}

#[test]
fn template_literals() {
    let program = parse("`a${b}c`;");
    let Expression::TemplateLiteral(template) = first_expression(&program) else {
        panic!("expected a template literal")
    };
    assert_eq!(template.quasis.len(), 2);
    assert_eq!(template.expressions.len(), 1);
    assert_eq!(&*template.quasis[0].value.raw, "a");
    assert!(template.quasis[1].tail);

    // Untagged templates reject undecodable escapes; tagged ones carry a
    // null cooked value instead.
    check_invalid("`\\u{ZZ}`;");
    parse("tag`\\u{ZZ}`;");
}

#[test]
fn spans_are_well_formed() {
    fn check_expr(expr: &Expression) {
        let span = expr.span();
        assert!(span.start <= span.end);
        assert!(span.loc.start <= span.loc.end);
    }
    let program = parse("a + b * (c - d);\nx = `t${y}`;\n");
    for statement in &program.body {
        let span = statement.span();
        assert!(span.start <= span.end);
        if let Statement::Expression(stmt) = statement {
            check_expr(&stmt.expression);
        }
    }
}
