//! Tests for the lexer.

use super::{Keyword, Lexer, LineMap, Numeric, NumericFlavor, Punctuator, Token, TokenKind};

fn lex(src: &str) -> Vec<Token> {
    Lexer::new(src).tokenize().expect("failed to lex")
}

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).into_iter().map(|t| t.kind().clone()).collect()
}

fn check_invalid(src: &str) {
    assert!(
        Lexer::new(src).tokenize().is_err(),
        "expected a lex error for {src:?}"
    );
}

fn number(src: &str) -> f64 {
    let tokens = lex(src);
    match tokens[0].kind() {
        TokenKind::NumericLiteral {
            value: Numeric::Number(n),
            ..
        } => *n,
        other => panic!("expected a number token, got {other:?}"),
    }
}

#[test]
fn check_single_line_comment() {
    let tokens = lex("var \n//this is a comment\ntrue");
    assert_eq!(tokens[0].kind(), &TokenKind::Keyword(Keyword::Var));
    assert_eq!(tokens[1].kind(), &TokenKind::BooleanLiteral(true));
    assert!(tokens[1].newline_before());
    assert_eq!(tokens[2].kind(), &TokenKind::Eof);
}

#[test]
fn check_multi_line_comment_counts_as_newline() {
    let tokens = lex("a /* stretching\nover lines */ b");
    assert_eq!(tokens[0].kind(), &TokenKind::Identifier);
    assert!(tokens[1].newline_before());
}

#[test]
fn check_string_and_escapes() {
    let tokens = lex(r#"'ab\n\x41B\u{43}c'"#);
    match tokens[0].kind() {
        TokenKind::StringLiteral {
            value,
            legacy_octal_escape,
            lone_surrogate,
        } => {
            assert_eq!(&**value, "ab\nABCc");
            assert!(!legacy_octal_escape);
            assert!(!lone_surrogate);
        }
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn check_legacy_octal_escape_flag() {
    for src in [r"'\1'", r"'\07'", r"'\08'", r"'\9'"] {
        match lex(src)[0].kind() {
            TokenKind::StringLiteral {
                legacy_octal_escape,
                ..
            } => assert!(legacy_octal_escape, "no flag for {src}"),
            other => panic!("expected string, got {other:?}"),
        }
    }
    // A lone \0 is the ordinary NUL escape.
    match lex(r"'\0'")[0].kind() {
        TokenKind::StringLiteral {
            value,
            legacy_octal_escape,
            ..
        } => {
            assert_eq!(&**value, "\0");
            assert!(!legacy_octal_escape);
        }
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn check_surrogate_pairing() {
    match lex(r"'😀'")[0].kind() {
        TokenKind::StringLiteral {
            value,
            lone_surrogate,
            ..
        } => {
            assert_eq!(&**value, "\u{1F600}");
            assert!(!lone_surrogate);
        }
        other => panic!("expected string, got {other:?}"),
    }
    match lex(r"'\uD83D'")[0].kind() {
        TokenKind::StringLiteral { lone_surrogate, .. } => assert!(lone_surrogate),
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn check_numbers() {
    assert_eq!(number("42"), 42.0);
    assert_eq!(number("42.5e2"), 4250.0);
    assert_eq!(number("0xff"), 255.0);
    assert_eq!(number("0o17"), 15.0);
    assert_eq!(number("0b101"), 5.0);
    assert_eq!(number("1_000_000"), 1_000_000.0);
    assert_eq!(number(".5"), 0.5);
}

#[test]
fn check_legacy_octal_numbers() {
    let tokens = lex("017");
    match tokens[0].kind() {
        TokenKind::NumericLiteral {
            value: Numeric::Number(n),
            flavor,
        } => {
            assert_eq!(*n, 15.0);
            assert_eq!(*flavor, NumericFlavor::LegacyOctal);
        }
        other => panic!("expected number, got {other:?}"),
    }
    let tokens = lex("089");
    match tokens[0].kind() {
        TokenKind::NumericLiteral {
            value: Numeric::Number(n),
            flavor,
        } => {
            assert_eq!(*n, 89.0);
            assert_eq!(*flavor, NumericFlavor::NonOctalDecimal);
        }
        other => panic!("expected number, got {other:?}"),
    }
}

#[test]
fn check_bigint() {
    let tokens = lex("0xffn");
    match tokens[0].kind() {
        TokenKind::NumericLiteral {
            value: Numeric::BigInt(digits),
            ..
        } => assert_eq!(&**digits, "255"),
        other => panic!("expected bigint, got {other:?}"),
    }
}

#[test]
fn check_number_followed_by_identifier_is_an_error() {
    check_invalid("3in x");
    check_invalid("3x");
}

#[test]
fn check_template_tokens() {
    let kinds = kinds("`a${b}c${d}e`");
    assert!(matches!(kinds[0], TokenKind::TemplateHead(_)));
    assert_eq!(kinds[1], TokenKind::Identifier);
    assert!(matches!(kinds[2], TokenKind::TemplateMiddle(_)));
    assert_eq!(kinds[3], TokenKind::Identifier);
    assert!(matches!(kinds[4], TokenKind::TemplateTail(_)));
}

#[test]
fn check_template_nested_braces() {
    // The object literal's closing brace must not end the substitution.
    let kinds = kinds("`${ {a: 1} }`");
    assert!(matches!(kinds[0], TokenKind::TemplateHead(_)));
    assert!(matches!(kinds.last(), Some(TokenKind::Eof)));
    assert!(kinds
        .iter()
        .any(|k| matches!(k, TokenKind::TemplateTail(_))));
}

#[test]
fn check_template_invalid_escape_has_null_cooked() {
    match &kinds("`\\u{ZZ}`")[0] {
        TokenKind::TemplateNoSubstitution(ts) => assert!(ts.cooked.is_none()),
        other => panic!("expected template, got {other:?}"),
    }
}

#[test]
fn check_regex_vs_division() {
    let div_kinds = kinds("a / b");
    assert_eq!(div_kinds[1], TokenKind::Punctuator(Punctuator::Div));

    let regex_kinds = kinds("x = /ab+c/gi");
    match &regex_kinds[2] {
        TokenKind::RegularExpressionLiteral { pattern, flags } => {
            assert_eq!(&**pattern, "ab+c");
            assert_eq!(&**flags, "gi");
        }
        other => panic!("expected regex, got {other:?}"),
    }

    // After the head of an `if`, a regex may begin the body.
    let if_kinds = kinds("if (x) /re/.test(y)");
    assert!(if_kinds
        .iter()
        .any(|k| matches!(k, TokenKind::RegularExpressionLiteral { .. })));
}

#[test]
fn check_regex_flags_validated() {
    check_invalid("/a/gg");
    check_invalid("/a/q");
    check_invalid("/a/uv");
}

#[test]
fn check_escaped_identifier_detected() {
    // `o\u0066` decodes to `of` but keeps its longer source span.
    let tokens = lex(r"o\u0066");
    assert_eq!(tokens[0].kind(), &TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme(), "of");
    assert!(tokens[0].contains_escapes());

    let tokens = lex("of");
    assert!(!tokens[0].contains_escapes());
}

#[test]
fn check_escaped_keyword_keeps_keyword_kind() {
    let tokens = lex(r"cl\u0061ss");
    assert_eq!(tokens[0].kind(), &TokenKind::Keyword(Keyword::Class));
    assert!(tokens[0].contains_escapes());
}

#[test]
fn check_optional_chain_vs_ternary_with_number() {
    let chain_kinds = kinds("a?.b");
    assert_eq!(chain_kinds[1], TokenKind::Punctuator(Punctuator::Optional));

    let ternary_kinds = kinds("a?.5:b");
    assert_eq!(ternary_kinds[1], TokenKind::Punctuator(Punctuator::Question));
}

#[test]
fn check_positions() {
    let tokens = lex("a\n  b");
    assert_eq!(tokens[0].span().loc.start.line, 1);
    assert_eq!(tokens[0].span().loc.start.column, 0);
    assert_eq!(tokens[1].span().loc.start.line, 2);
    assert_eq!(tokens[1].span().loc.start.column, 2);
    assert_eq!(tokens[1].span().start, 4);
}

#[test]
fn check_hashbang_skipped() {
    let tokens = lex("#!/usr/bin/env node\nlet");
    assert_eq!(tokens[0].kind(), &TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme(), "let");
}

#[test]
fn check_unterminated_constructs() {
    check_invalid("'abc");
    check_invalid("`abc");
    check_invalid("/* abc");
    check_invalid("/abc");
}

#[test]
fn check_line_map() {
    let src = "ab\ncd\r\nef";
    let map = LineMap::new(src);
    assert_eq!(map.position_at(src, 0).line, 1);
    assert_eq!(map.position_at(src, 4).line, 2);
    assert_eq!(map.position_at(src, 4).column, 1);
    assert_eq!(map.position_at(src, 7).line, 3);
    assert_eq!(map.position_at(src, 7).column, 0);
}
