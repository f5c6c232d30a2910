//! Tests for the parser.

use crate::{Parser, ParserOptions};
use sparrow_ast::{
    declaration::VariableKind,
    statement::{ForInit, ForTarget, Statement},
    Program, SourceType,
};

fn parse(src: &str) -> Program {
    Parser::new(src)
        .parse()
        .unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

fn parse_module(src: &str) -> Program {
    Parser::with_options(src, ParserOptions::module())
        .parse()
        .unwrap_or_else(|e| panic!("failed to parse module {src:?}: {e}"))
}

fn check_invalid(src: &str) {
    assert!(
        Parser::new(src).parse().is_err(),
        "expected an error for {src:?}"
    );
}

fn check_invalid_module(src: &str) {
    assert!(
        Parser::with_options(src, ParserOptions::module()).parse().is_err(),
        "expected a module error for {src:?}"
    );
}

#[test]
fn program_shape() {
    let program = parse("a; b;");
    assert_eq!(program.source_type, SourceType::Script);
    assert_eq!(program.body.len(), 2);
    assert_eq!(program.span.start, 0);
    assert_eq!(program.span.end, 5);

    let module = parse_module("export const x = 1;");
    assert_eq!(module.source_type, SourceType::Module);
}

// ---- declarations and scopes --------------------------------------------

#[test]
fn duplicate_lexical_declaration() {
    check_invalid("let x = 1; let x = 2;");
    check_invalid("let x = 1; var x = 2;");
    check_invalid("var x = 1; let x = 2;");
    check_invalid("let x = 1; function x() {}");
    parse("var x = 1; var x = 2;");
    parse("let x = 1; { let x = 2; }");
}

#[test]
fn var_hoists_out_of_blocks() {
    check_invalid("{ { var x; } } let x;");
    check_invalid("let x; { var x; }");
    parse("function f() { var x; } let x;");
}

#[test]
fn for_head_and_body_share_scope() {
    parse("for (let i = 0; i < 3; i++) { var j = i }");
    check_invalid("for (let i = 0; ; ) { var i = 1 }");
    check_invalid("for (let i of x) { var i; }");
    parse("for (let i = 0; ; ) { let i = 1 }");
}

#[test]
fn const_requires_initializer() {
    check_invalid("const x;");
    check_invalid("for (const x; ; ) ;");
    parse("for (const x of list) ;");
    parse("for (const x in obj) ;");
}

#[test]
fn destructuring_declarations_require_initializers() {
    check_invalid("let {a};");
    check_invalid("var [a];");
    parse("let {a} = x;");
}

#[test]
fn annex_b_duplicate_plain_functions() {
    parse("function f() {} function f() {}");
    check_invalid("'use strict'; function f() {} function f() {}");
    check_invalid("function* f() {} function* f() {}");
    check_invalid("async function f() {} async function f() {}");
}

#[test]
fn lexical_binding_cannot_be_named_let() {
    check_invalid("let let = 1;");
    check_invalid("const let = 1;");
    parse("var let = 1;");
}

// ---- let disambiguation --------------------------------------------------

#[test]
fn let_as_identifier() {
    parse("let = 1;");
    parse("let;");
    parse("let(x);");
    parse("let.x;");
}

#[test]
fn let_as_declaration() {
    let program = parse("let x = 1;");
    assert!(matches!(
        &program.body[0],
        Statement::VariableDeclaration(decl) if decl.kind == VariableKind::Let
    ));
    parse("let [a] = x;");
    parse("let {a} = x;");
    parse("let yield = 1;");
}

#[test]
fn let_bracket_always_declares() {
    // Even in single-statement positions `let [` is a declaration, which is
    // not admitted there.
    check_invalid("while (x) let [a] = b;");
    check_invalid("if (x) let y = 1;");
    // ASI splits `let` from a binding identifier on the next line in a
    // statement-only context.
    parse("while (x) let\ny = 1;");
}

// ---- ASI and restricted productions --------------------------------------

#[test]
fn asi_inserts_semicolons() {
    let explicit = parse("a = 1; b = 2;");
    let inserted = parse("a = 1\nb = 2");
    assert_eq!(explicit.body.len(), inserted.body.len());
    parse("{ a = 1 }");
    parse("do {} while (true) a = 1;");
    check_invalid("a = 1 b = 2");
}

#[test]
fn asi_before_statement_keywords() {
    parse("x = y\nfunction f() {}");
    parse("x = y\nclass A {}");
}

#[test]
fn return_argument_restriction() {
    let program = parse("function f() { return\n1; }");
    let Statement::FunctionDeclaration(function) = &program.body[0] else {
        panic!("expected a function declaration")
    };
    let Statement::Return(ret) = &function.body.body[0] else {
        panic!("expected a return statement")
    };
    assert!(ret.argument.is_none(), "ASI must terminate the bare return");
    check_invalid("return 1;");
}

#[test]
fn throw_newline_is_an_error() {
    check_invalid("throw\nnew Error();");
    parse("throw new Error();");
}

// ---- labels and flow ------------------------------------------------------

#[test]
fn labels_resolve() {
    parse("outer: for (;;) { continue outer; }");
    parse("outer: for (;;) { break outer; }");
    parse("a: b: for (;;) { continue a; }");
    check_invalid("outer: { continue outer; }");
    check_invalid("continue;");
    check_invalid("break;");
    check_invalid("outer: outer: ;");
    check_invalid("for (;;) { continue missing; }");
}

#[test]
fn labels_do_not_cross_function_boundaries() {
    check_invalid("outer: for (;;) { function f() { break outer; } f(); }");
}

#[test]
fn break_in_switch() {
    parse("switch (x) { case 1: break; }");
    check_invalid("switch (x) { case 1: continue; }");
}

// ---- statements -----------------------------------------------------------

#[test]
fn switch_single_default() {
    parse("switch (x) { case 1: case 2: break; default: ; }");
    check_invalid("switch (x) { default: ; default: ; }");
    check_invalid("switch (x) { let y = 1; }");
    // Cases share one lexical scope.
    check_invalid("switch (x) { case 1: let a; case 2: let a; }");
}

#[test]
fn try_statement_forms() {
    parse("try {} catch {}");
    parse("try {} catch (e) {}");
    parse("try {} catch ({message}) {}");
    parse("try {} finally {}");
    check_invalid("try {}");
    check_invalid("try {} catch (e) { let e; }");
    check_invalid("try {} catch ([a, a]) {}");
}

#[test]
fn with_statement_sloppy_only() {
    parse("with (o) { x; }");
    check_invalid("'use strict'; with (o) {}");
    check_invalid("function f() { 'use strict'; with (o) {} }");
}

#[test]
fn single_statement_contexts_reject_declarations() {
    check_invalid("if (x) class A {}");
    check_invalid("if (x) const y = 1;");
    check_invalid("while (x) function* g() {}");
    check_invalid("if (x) async function f() {}");
    // Annex B admits a plain function in sloppy mode.
    parse("if (x) function f() {}");
    check_invalid("'use strict'; if (x) function f() {}");
    // It does not join the lexically declared names.
    parse("if (x) function f() {} let f;");
}

#[test]
fn for_forms() {
    parse("for (;;) break;");
    parse("for (var i = 0; i < 3; i++) ;");
    parse("for (x in obj) ;");
    parse("for ([a, b] of pairs) ;");
    parse("for ({a} of list) ;");
    check_invalid("for (let x = 1 in obj) ;");
    check_invalid("for (let x = 1 of list) ;");
    check_invalid("for (var x = 1 of list) ;");
    check_invalid("for (x, y of list) ;");
    check_invalid("for (f() of list) ;");
}

#[test]
fn for_in_var_initializer_annex_b() {
    let program = parse("for (var x = 1 in obj) ;");
    let Statement::ForIn(for_in) = &program.body[0] else {
        panic!("expected a for-in statement")
    };
    assert!(matches!(&for_in.left, ForTarget::VariableDeclaration(_)));
    check_invalid("'use strict'; for (var x = 1 in obj) ;");
    check_invalid("for (var [a] = 1 in obj) ;");
}

#[test]
fn for_await_requires_async_context() {
    parse("async function f() { for await (const x of xs) {} }");
    check_invalid("function f() { for await (const x of xs) {} }");
    check_invalid("async function f() { for await (const x in xs) {} }");
    Parser::with_options("for await (const x of xs) {}", ParserOptions::module())
        .parse()
        .expect("top-level for-await should parse in modules");
}

#[test]
fn for_of_rejects_literal_async_head() {
    check_invalid("for (async of list) ;");
    parse("for (async.x of list) ;");
    parse("for (async of => {};;) ;");
}

#[test]
fn classic_for_keeps_in_operator_out_of_head() {
    // `in` after the head expression always means a for-in loop.
    let program = parse("for (a in b) ;");
    assert!(matches!(&program.body[0], Statement::ForIn(_)));
    // A parenthesized `in` stays an operator inside the init clause.
    let program = parse("for (a = (x in b); false; ) ;");
    assert!(matches!(&program.body[0], Statement::For(f)
        if matches!(f.init, Some(ForInit::Expression(_)))));
}

// ---- directives and strict mode -------------------------------------------

#[test]
fn use_strict_applies_immediately() {
    check_invalid("'use strict'; with (o) {}");
    check_invalid("'use strict'; x = 017;");
    check_invalid("function f() { 'use strict'; x = 017; }");
    parse("x = 017;");
}

#[test]
fn directives_are_recorded() {
    let program = parse("'use strict';\n'other directive';\nx;");
    let Statement::Expression(first) = &program.body[0] else {
        panic!("expected an expression statement")
    };
    assert_eq!(first.directive.as_deref(), Some("use strict"));
    let Statement::Expression(second) = &program.body[1] else {
        panic!("expected an expression statement")
    };
    assert_eq!(second.directive.as_deref(), Some("other directive"));
    let Statement::Expression(third) = &program.body[2] else {
        panic!("expected an expression statement")
    };
    assert!(third.directive.is_none());
}

#[test]
fn parenthesized_string_is_not_a_directive() {
    // The parenthesized string is not a directive, so strict mode never
    // turns on and the octal literal stays legal.
    parse("('use strict'); x = 017;");
}

#[test]
fn legacy_octal_escape_before_use_strict() {
    check_invalid("'\\1'; 'use strict';");
    check_invalid("function f() { '\\1'; 'use strict'; }");
    parse("'\\1';");
}

#[test]
fn use_strict_with_non_simple_parameters() {
    check_invalid("function f(a = 1) { 'use strict'; }");
    check_invalid("function f([a]) { 'use strict'; }");
    check_invalid("(a = 1) => { 'use strict'; };");
    parse("function f(a) { 'use strict'; }");
}

#[test]
fn strict_mode_restrictions() {
    check_invalid("'use strict'; var eval = 1;");
    check_invalid("'use strict'; let arguments = 1;");
    check_invalid("'use strict'; function f(a, a) {}");
    check_invalid("'use strict'; var implements;");
    parse("function f(a, a) {}");
    check_invalid("function f(a, a) { 'use strict'; }");
    check_invalid("function f([a], a, a) {}");
}

#[test]
fn late_strict_revalidates_function_name() {
    check_invalid("function eval() { 'use strict'; }");
    check_invalid("(function arguments() { 'use strict'; });");
    parse("function eval() {}");
}

#[test]
fn force_strict_option() {
    assert!(
        Parser::with_options("with (o) {}", ParserOptions::strict())
            .parse()
            .is_err()
    );
}

// ---- functions ------------------------------------------------------------

#[test]
fn function_forms() {
    parse("function f(a, b = 1, ...rest) { return a + b; }");
    parse("function* g() { yield 1; }");
    parse("async function a() { await 1; }");
    parse("async function* ag() { for await (const x of xs) { yield x; } }");
    check_invalid("function f(...rest, a) {}");
    check_invalid("function f(a = await 1) {}");
}

#[test]
fn parameters_and_body_bindings_clash() {
    check_invalid("function f(a) { let a; }");
    parse("function f(a) { var a; }");
}

#[test]
fn async_needs_same_line_function() {
    // With a newline, `async` is an identifier expression statement.
    let program = parse("async\nfunction f() {}");
    assert_eq!(program.body.len(), 2);
}

// ---- classes --------------------------------------------------------------

#[test]
fn class_bodies() {
    parse("class A { constructor() {} m() {} get x() { return 1; } set x(v) {} static s() {} }");
    parse("class A { #x = 1; static #y; static { this.#y = 2; } }");
    parse("class A extends B { constructor() { super(); } m() { return super.m(); } }");
    check_invalid("class A { constructor() {} constructor() {} }");
    check_invalid("class A { static prototype() {} }");
    check_invalid("class A { #constructor; }");
    check_invalid("class A { constructor = 1; }");
    check_invalid("class A { *constructor() {} }");
    check_invalid("class A { get constructor() {} }");
}

#[test]
fn private_names_resolve_at_class_close() {
    parse("class A { m() { return this.#x; } #x; }");
    check_invalid("class A { #x; method() { return this.#y } }");
    parse("class A { #x; m() { return new class { n() { return this.#x; } }(); } }");
    check_invalid("this.#x;");
}

#[test]
fn private_accessor_pairs() {
    parse("class A { get #x() { return 1; } set #x(v) {} }");
    check_invalid("class A { #x; #x; }");
    check_invalid("class A { get #x() {} get #x() {} }");
}

#[test]
fn class_heritage_uses_outer_private_scope() {
    parse("class A { #x; m() { return class extends (obj.#x) {}; } }");
    check_invalid("class B extends (obj.#x) {}");
}

#[test]
fn super_calls_only_in_derived_constructors() {
    check_invalid("class A { constructor() { super(); } }");
    check_invalid("class A extends B { m() { super(); } }");
    parse("class A extends B { constructor() { super(); } }");
}

#[test]
fn class_is_always_strict() {
    check_invalid("class A { m() { x = 017; } }");
    check_invalid("class implements {}");
}

#[test]
fn class_fields_restrictions() {
    check_invalid("class A { x = arguments; }");
    check_invalid("class A { x = await 1; }");
    parse("class A { x = this.y; }");
}

#[test]
fn static_blocks() {
    parse("class A { static { let x = 1; } }");
    check_invalid("class A { static { return; } }");
    check_invalid("class A { static { var await; } }");
}

// ---- modules --------------------------------------------------------------

#[test]
fn import_forms() {
    parse_module("import 'mod';");
    parse_module("import d from 'mod';");
    parse_module("import * as ns from 'mod';");
    parse_module("import { a, b as c } from 'mod';");
    parse_module("import d, { a } from 'mod';");
    parse_module("import d, * as ns from 'mod';");
    parse_module("import { 'strange name' as ok } from 'mod';");
    parse_module("import data from 'mod' with { type: 'json' };");
    check_invalid_module("import { 'strange name' } from 'mod';");
}

#[test]
fn import_only_at_module_top_level() {
    check_invalid("import d from 'mod';");
    check_invalid_module("{ import d from 'mod'; }");
    check_invalid_module("function f() { import d from 'mod'; }");
    // Dynamic import and import.meta stay expressions everywhere.
    parse("f(import('mod'));");
}

#[test]
fn import_bindings_are_lexical() {
    check_invalid_module("import { a } from 'mod'; let a;");
    check_invalid_module("import { a, b as a } from 'mod';");
}

#[test]
fn export_forms() {
    parse_module("export const x = 1;");
    parse_module("export function f() {}");
    parse_module("export default function () {}");
    parse_module("export default 40 + 2;");
    parse_module("let a; export { a };");
    parse_module("let a; export { a as b };");
    parse_module("export { a } from 'mod';");
    parse_module("export { 'strange name' as ok } from 'mod';");
    parse_module("export * from 'mod';");
    parse_module("export * as ns from 'mod';");
    parse_module("export { x } from 'mod' with { type: 'json' };");
}

#[test]
fn duplicate_exports() {
    check_invalid_module("export const x = 1; export { x };");
    check_invalid_module("let a, b; export { a, b as a };");
    check_invalid_module("export default 1; export default 2;");
    check_invalid_module("export * as a from 'm'; export const a = 1;");
}

#[test]
fn export_bindings_resolve_at_module_close() {
    parse_module("export { late }; let late = 1;");
    check_invalid_module("export { missing };");
    parse_module("export { f }; function f() {}");
}

#[test]
fn duplicate_import_attribute_keys() {
    check_invalid_module("import d from 'mod' with { type: 'json', type: 'json' };");
    check_invalid_module("export * from 'mod' with { a: '1', 'a': '2' };");
}

#[test]
fn modules_are_strict() {
    check_invalid_module("with (o) {}");
    check_invalid_module("x = 017;");
    check_invalid_module("export var await;");
}

// ---- serialization --------------------------------------------------------

/// Strips the span fields, leaving the structural shape of the tree.
fn shape(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.remove("start");
            map.remove("end");
            map.remove("loc");
            for entry in map.values_mut() {
                shape(entry);
            }
        }
        serde_json::Value::Array(values) => {
            for entry in values.iter_mut() {
                shape(entry);
            }
        }
        _ => {}
    }
}

#[test]
fn json_round_trip_is_idempotent() {
    let src = "class A { #x = 1; m(a = 2) { return a ?? this.#x; } }\nfor (const [k, v] of m) f(`${k}:`, v);\n";
    let first = serde_json::to_value(parse(src)).expect("serialization should succeed");
    let second = serde_json::to_value(parse(src)).expect("serialization should succeed");
    assert_eq!(first, second);
}

#[test]
fn asi_equivalent_sources_have_equal_shapes() {
    let mut implicit = serde_json::to_value(parse("a = 1\nb = 2\n")).unwrap();
    let mut explicit = serde_json::to_value(parse("a = 1;\nb = 2;\n")).unwrap();
    shape(&mut implicit);
    shape(&mut explicit);
    assert_eq!(implicit, explicit);
}

#[test]
fn estree_tags_serialize() {
    let value = serde_json::to_value(parse("let x = [1, , 2];")).unwrap();
    assert_eq!(value["type"], "Program");
    assert_eq!(value["sourceType"], "script");
    assert_eq!(value["body"][0]["type"], "VariableDeclaration");
    assert_eq!(value["body"][0]["kind"], "let");
    let elements = &value["body"][0]["declarations"][0]["init"]["elements"];
    assert_eq!(elements[0]["type"], "Literal");
    assert!(elements[1].is_null());
}
