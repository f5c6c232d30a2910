//! A lexical analyzer for ECMAScript source code.
//!
//! The lexer splits its input source code into a sequence of input elements
//! called tokens, represented by the [Token] structure, terminated by an
//! end-of-file sentinel. It removes whitespace and comments and records, on
//! every token, whether a line terminator preceded it; that bit is what the
//! parser's automatic-semicolon-insertion logic consumes.
//!
//! More information:
//!  - [ECMAScript reference][spec]
//!
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-lexical-grammar

pub mod error;
pub mod keyword;
pub mod punctuator;
pub mod token;

#[cfg(test)]
mod tests;

pub use self::{
    error::Error,
    keyword::Keyword,
    punctuator::Punctuator,
    token::{Numeric, NumericFlavor, TemplateString, Token, TokenKind},
};

use num_traits::Num;
use sparrow_ast::{Location, Position, Span};

/// A line-offset index over the source.
///
/// Maps a byte offset to a `(line, column)` pair in `O(log n)`. The lexer
/// tracks positions incrementally while scanning; this index exists for
/// synthesized spans, such as template element interiors, that are not
/// token-bounded.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offsets of the first character of every line.
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Builds the index for the given source.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = source.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '\r' => {
                    if matches!(chars.peek(), Some((_, '\n'))) {
                        continue;
                    }
                    line_starts.push((i + 1) as u32);
                }
                '\n' | '\u{2028}' | '\u{2029}' => {
                    line_starts.push((i + c.len_utf8()) as u32);
                }
                _ => {}
            }
        }
        Self { line_starts }
    }

    /// Maps a byte offset to its line/column position.
    ///
    /// The offset must lie on a character boundary of the source the index
    /// was built from.
    #[must_use]
    pub fn position_at(&self, source: &str, offset: u32) -> Position {
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line_idx];
        let column = source[line_start as usize..offset as usize].chars().count() as u32;
        Position::new(line_idx as u32 + 1, column)
    }
}

/// Whether the character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_ascii_alphabetic() || (!c.is_ascii() && c.is_alphabetic())
}

/// Whether the character can continue an identifier.
fn is_ident_part(c: char) -> bool {
    c == '$'
        || c == '_'
        || c.is_ascii_alphanumeric()
        || c == '\u{200C}'
        || c == '\u{200D}'
        || (!c.is_ascii() && c.is_alphanumeric())
}

/// Whether the character is an ECMAScript line terminator.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whether the character is ECMAScript whitespace.
fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\u{000B}' | '\u{000C}' | ' ' | '\u{00A0}' | '\u{FEFF}')
        || (!c.is_ascii() && !is_line_terminator(c) && c.is_whitespace())
}

/// Lexer for ECMAScript source, producing the full token vector in one pass.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    /// Current byte offset into the source.
    pos: usize,
    /// Current 1-based line.
    line: u32,
    /// Current 0-based column, counted in characters.
    column: u32,
    /// Whether a line terminator occurred since the last token.
    newline_pending: bool,
    tokens: Vec<Token>,
    /// Open `{` count, for matching template substitutions.
    brace_depth: usize,
    /// Brace depths at which an open template substitution waits for its
    /// closing `}`.
    template_stack: Vec<usize>,
    /// For every open `(`, whether a regular expression may follow the
    /// matching `)`. True for the parenthesized heads of `if`, `while`,
    /// `for` and `with`.
    paren_stack: Vec<bool>,
    /// Whether a regular expression may follow the most recent `)`.
    regex_after_paren: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 0,
            newline_pending: false,
            tokens: Vec::new(),
            brace_depth: 0,
            template_stack: Vec::new(),
            paren_stack: Vec::new(),
            regex_after_paren: false,
        }
    }

    /// Lexes the entire source, returning the token vector terminated by an
    /// end-of-file sentinel.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        if self.source.starts_with("#!") {
            // Hashbang comment, only valid at the very start.
            while let Some(c) = self.peek() {
                if is_line_terminator(c) {
                    break;
                }
                self.bump();
            }
        }

        loop {
            self.skip_trivia()?;
            let Some(c) = self.peek() else {
                let pos = self.position();
                let span = Span::new(self.pos as u32, self.pos as u32, Location::new(pos, pos));
                self.push_token(TokenKind::Eof, "", span);
                break;
            };

            match c {
                '}' if self.template_stack.last() == Some(&self.brace_depth) => {
                    self.template_stack.pop();
                    self.lex_template_continuation()?;
                }
                '"' | '\'' => self.lex_string(c)?,
                '`' => self.lex_template_start()?,
                '0'..='9' => self.lex_number()?,
                '.' if matches!(self.peek_at(1), Some('0'..='9')) => self.lex_number()?,
                '#' => self.lex_private_identifier()?,
                '\\' => self.lex_identifier()?,
                _ if is_ident_start(c) => self.lex_identifier()?,
                _ => self.lex_punctuator()?,
            }
        }

        Ok(self.tokens)
    }

    // ---- character primitives -------------------------------------------

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_at(&self, skip: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(skip)
    }

    /// Consumes the next character. Line terminators must go through
    /// [`Self::bump_line`] instead so positions stay correct.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.column += 1;
        Some(c)
    }

    /// Consumes a line terminator, collapsing `\r\n` into a single line.
    fn bump_line(&mut self) {
        let c = self.peek().expect("caller checked for a line terminator");
        self.pos += c.len_utf8();
        if c == '\r' && self.peek() == Some('\n') {
            self.pos += 1;
        }
        self.line += 1;
        self.column = 0;
        self.newline_pending = true;
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn span_from(&self, start_pos: usize, start: Position) -> Span {
        Span::new(
            start_pos as u32,
            self.pos as u32,
            Location::new(start, self.position()),
        )
    }

    fn push_token<L>(&mut self, kind: TokenKind, lexeme: L, span: Span)
    where
        L: Into<Box<str>>,
    {
        let newline = std::mem::take(&mut self.newline_pending);
        self.tokens.push(Token::new(kind, lexeme.into(), span, newline));
    }

    fn error<M>(&self, message: M) -> Error
    where
        M: Into<Box<str>>,
    {
        Error::syntax(message, self.position())
    }

    // ---- trivia ---------------------------------------------------------

    /// Skips whitespace and comments, recording line terminators.
    fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            let Some(c) = self.peek() else { return Ok(()) };
            if is_line_terminator(c) {
                self.bump_line();
            } else if is_whitespace(c) {
                self.bump();
            } else if c == '/' && self.peek_at(1) == Some('/') {
                self.bump();
                self.bump();
                while let Some(c) = self.peek() {
                    if is_line_terminator(c) {
                        break;
                    }
                    self.bump();
                }
            } else if c == '/' && self.peek_at(1) == Some('*') {
                self.bump();
                self.bump();
                let mut terminated = false;
                while let Some(c) = self.peek() {
                    if c == '*' && self.peek_at(1) == Some('/') {
                        self.bump();
                        self.bump();
                        terminated = true;
                        break;
                    }
                    if is_line_terminator(c) {
                        self.bump_line();
                    } else {
                        self.bump();
                    }
                }
                if !terminated {
                    return Err(self.error("unterminated multiline comment"));
                }
            } else {
                return Ok(());
            }
        }
    }

    // ---- identifiers and keywords ---------------------------------------

    /// Decodes a `\uXXXX` or `\u{XXXXXX}` sequence, the leading `\` already
    /// consumed. Returns the raw code point, which may be an unpaired
    /// surrogate.
    fn lex_unicode_escape(&mut self) -> Result<u32, Error> {
        if self.bump() != Some('u') {
            return Err(self.error("invalid escape sequence"));
        }
        if self.peek() == Some('{') {
            self.bump();
            let mut value: u32 = 0;
            let mut digits = 0;
            while let Some(c) = self.peek() {
                if c == '}' {
                    break;
                }
                let digit = c
                    .to_digit(16)
                    .ok_or_else(|| self.error("invalid Unicode escape sequence"))?;
                value = value
                    .checked_mul(16)
                    .and_then(|v| v.checked_add(digit))
                    .filter(|&v| v <= 0x0010_FFFF)
                    .ok_or_else(|| self.error("Unicode code point out of range"))?;
                digits += 1;
                self.bump();
            }
            if self.bump() != Some('}') || digits == 0 {
                return Err(self.error("invalid Unicode escape sequence"));
            }
            Ok(value)
        } else {
            let mut value: u32 = 0;
            for _ in 0..4 {
                let digit = self
                    .peek()
                    .and_then(|c| c.to_digit(16))
                    .ok_or_else(|| self.error("invalid Unicode escape sequence"))?;
                value = value * 16 + digit;
                self.bump();
            }
            Ok(value)
        }
    }

    fn lex_identifier(&mut self) -> Result<(), Error> {
        let start_pos = self.pos;
        let start = self.position();
        let mut name = String::new();
        let mut first = true;

        loop {
            match self.peek() {
                Some('\\') => {
                    self.bump();
                    let code = self.lex_unicode_escape()?;
                    let c = char::from_u32(code)
                        .ok_or_else(|| self.error("invalid Unicode escape sequence"))?;
                    let valid = if first {
                        is_ident_start(c)
                    } else {
                        is_ident_part(c)
                    };
                    if !valid {
                        return Err(self.error("invalid character in identifier"));
                    }
                    name.push(c);
                }
                Some(c) if (first && is_ident_start(c)) || (!first && is_ident_part(c)) => {
                    self.bump();
                    name.push(c);
                }
                _ if first => return Err(self.error("unexpected character")),
                _ => break,
            }
            first = false;
        }

        let span = self.span_from(start_pos, start);
        let kind = match name.as_str() {
            "true" => TokenKind::BooleanLiteral(true),
            "false" => TokenKind::BooleanLiteral(false),
            "null" => TokenKind::NullLiteral,
            word => match Keyword::from_word(word) {
                Some(keyword) => TokenKind::Keyword(keyword),
                None => TokenKind::Identifier,
            },
        };
        self.push_token(kind, name, span);
        Ok(())
    }

    fn lex_private_identifier(&mut self) -> Result<(), Error> {
        let start_pos = self.pos;
        let start = self.position();
        self.bump(); // '#'
        if !self.peek().is_some_and(is_ident_start) && self.peek() != Some('\\') {
            return Err(self.error("expected identifier after '#'"));
        }
        let mut name = String::new();
        loop {
            match self.peek() {
                Some('\\') => {
                    self.bump();
                    let code = self.lex_unicode_escape()?;
                    let c = char::from_u32(code)
                        .ok_or_else(|| self.error("invalid Unicode escape sequence"))?;
                    let valid = if name.is_empty() {
                        is_ident_start(c)
                    } else {
                        is_ident_part(c)
                    };
                    if !valid {
                        return Err(self.error("invalid character in identifier"));
                    }
                    name.push(c);
                }
                Some(c) if (name.is_empty() && is_ident_start(c)) || (!name.is_empty() && is_ident_part(c)) => {
                    self.bump();
                    name.push(c);
                }
                _ => break,
            }
        }
        let span = self.span_from(start_pos, start);
        self.push_token(TokenKind::PrivateIdentifier, name, span);
        Ok(())
    }

    // ---- strings --------------------------------------------------------

    fn lex_string(&mut self, quote: char) -> Result<(), Error> {
        let start_pos = self.pos;
        let start = self.position();
        self.bump(); // opening quote
        let mut value = String::new();
        let mut legacy_octal_escape = false;
        let mut lone_surrogate = false;

        loop {
            let Some(c) = self.peek() else {
                return Err(Error::syntax("unterminated string literal", start));
            };
            if c == quote {
                self.bump();
                break;
            }
            if is_line_terminator(c) {
                return Err(self.error("unterminated string literal"));
            }
            if c != '\\' {
                self.bump();
                value.push(c);
                continue;
            }

            // Escape sequence.
            self.bump();
            let Some(esc) = self.peek() else {
                return Err(Error::syntax("unterminated string literal", start));
            };
            match esc {
                'n' => {
                    self.bump();
                    value.push('\n');
                }
                't' => {
                    self.bump();
                    value.push('\t');
                }
                'r' => {
                    self.bump();
                    value.push('\r');
                }
                'b' => {
                    self.bump();
                    value.push('\u{0008}');
                }
                'f' => {
                    self.bump();
                    value.push('\u{000C}');
                }
                'v' => {
                    self.bump();
                    value.push('\u{000B}');
                }
                'x' => {
                    self.bump();
                    let hi = self.peek().and_then(|c| c.to_digit(16));
                    let lo = self.peek_at(1).and_then(|c| c.to_digit(16));
                    match (hi, lo) {
                        (Some(hi), Some(lo)) => {
                            self.bump();
                            self.bump();
                            value.push(
                                char::from_u32(hi * 16 + lo).expect("two hex digits are a char"),
                            );
                        }
                        _ => return Err(self.error("invalid hexadecimal escape sequence")),
                    }
                }
                'u' => {
                    let code = self.lex_unicode_escape()?;
                    match char::from_u32(code) {
                        Some(c) => value.push(c),
                        None if (0xD800..=0xDBFF).contains(&code) => {
                            // High surrogate: try to pair with a following
                            // \uXXXX low surrogate.
                            let mut paired = false;
                            if self.peek() == Some('\\') && self.peek_at(1) == Some('u') {
                                let save = (self.pos, self.line, self.column);
                                self.bump();
                                let low = self.lex_unicode_escape()?;
                                if (0xDC00..=0xDFFF).contains(&low) {
                                    let combined = 0x10000
                                        + ((code - 0xD800) << 10)
                                        + (low - 0xDC00);
                                    value.push(
                                        char::from_u32(combined)
                                            .expect("combined surrogates are a char"),
                                    );
                                    paired = true;
                                } else {
                                    (self.pos, self.line, self.column) = save;
                                }
                            }
                            if !paired {
                                lone_surrogate = true;
                                value.push(char::REPLACEMENT_CHARACTER);
                            }
                        }
                        None => {
                            lone_surrogate = true;
                            value.push(char::REPLACEMENT_CHARACTER);
                        }
                    }
                }
                '0'..='7' => {
                    // Legacy octal escape; a lone \0 not followed by a digit
                    // is the standard NUL escape.
                    let mut code = esc.to_digit(8).expect("checked octal digit");
                    self.bump();
                    if esc == '0' && !matches!(self.peek(), Some('0'..='9')) {
                        value.push('\0');
                        continue;
                    }
                    legacy_octal_escape = true;
                    let max_digits = if esc <= '3' { 2 } else { 1 };
                    for _ in 0..max_digits {
                        match self.peek().and_then(|c| c.to_digit(8)) {
                            Some(digit) => {
                                code = code * 8 + digit;
                                self.bump();
                            }
                            None => break,
                        }
                    }
                    value.push(char::from_u32(code).expect("octal escapes are below U+0100"));
                }
                '8' | '9' => {
                    // Non-octal decimal escape.
                    legacy_octal_escape = true;
                    self.bump();
                    value.push(esc);
                }
                _ if is_line_terminator(esc) => {
                    // Line continuation contributes nothing.
                    self.bump_line();
                    // The continuation is inside the token, so it must not
                    // count as a newline before the next one.
                    self.newline_pending = false;
                }
                _ => {
                    self.bump();
                    value.push(esc);
                }
            }
        }

        let span = self.span_from(start_pos, start);
        self.push_token(
            TokenKind::StringLiteral {
                value: value.into(),
                legacy_octal_escape,
                lone_surrogate,
            },
            "",
            span,
        );
        Ok(())
    }

    // ---- templates ------------------------------------------------------

    fn lex_template_start(&mut self) -> Result<(), Error> {
        self.lex_template(true)
    }

    fn lex_template_continuation(&mut self) -> Result<(), Error> {
        self.lex_template(false)
    }

    /// Scans one template token. `head` is true when the scan begins at a
    /// backtick, false when it resumes at the `}` closing a substitution.
    fn lex_template(&mut self, head: bool) -> Result<(), Error> {
        let start_pos = self.pos;
        let start = self.position();
        self.bump(); // '`' or '}'

        let mut raw = String::new();
        let mut cooked = Some(String::new());
        let closed_by_backtick;

        loop {
            let Some(c) = self.peek() else {
                return Err(Error::syntax("unterminated template literal", start));
            };
            match c {
                '`' => {
                    self.bump();
                    closed_by_backtick = true;
                    break;
                }
                '$' if self.peek_at(1) == Some('{') => {
                    self.bump();
                    self.bump();
                    self.template_stack.push(self.brace_depth);
                    closed_by_backtick = false;
                    break;
                }
                '\\' => {
                    self.bump();
                    let Some(esc) = self.peek() else {
                        return Err(Error::syntax("unterminated template literal", start));
                    };
                    raw.push('\\');
                    if is_line_terminator(esc) {
                        let nl_start = self.pos;
                        self.bump_line();
                        self.newline_pending = false;
                        let mut text = &self.source[nl_start..self.pos];
                        if text == "\r\n" || text == "\r" {
                            text = "\n";
                        }
                        raw.push_str(text);
                        continue;
                    }
                    self.bump();
                    raw.push(esc);
                    let Some(cooked_str) = cooked.as_mut() else {
                        // Already invalid; keep collecting raw text only.
                        self.skip_escape_tail(esc, &mut raw);
                        continue;
                    };
                    match esc {
                        'n' => cooked_str.push('\n'),
                        't' => cooked_str.push('\t'),
                        'r' => cooked_str.push('\r'),
                        'b' => cooked_str.push('\u{0008}'),
                        'f' => cooked_str.push('\u{000C}'),
                        'v' => cooked_str.push('\u{000B}'),
                        '0' if !matches!(self.peek(), Some('0'..='9')) => cooked_str.push('\0'),
                        '0'..='9' => {
                            // Legacy octal and non-octal decimal escapes are
                            // never valid in templates.
                            cooked = None;
                        }
                        'x' => {
                            let hi = self.peek().and_then(|c| c.to_digit(16));
                            let lo = self.peek_at(1).and_then(|c| c.to_digit(16));
                            if let (Some(hi), Some(lo)) = (hi, lo) {
                                let c1 = self.bump().expect("digit peeked");
                                let c2 = self.bump().expect("digit peeked");
                                raw.push(c1);
                                raw.push(c2);
                                cooked_str.push(
                                    char::from_u32(hi * 16 + lo)
                                        .expect("two hex digits are a char"),
                                );
                            } else {
                                cooked = None;
                            }
                        }
                        'u' => {
                            let escape_start = self.pos - 1;
                            // Rewind over the consumed 'u' so the shared
                            // decoder sees the full escape.
                            self.pos = escape_start;
                            self.column -= 1;
                            raw.pop();
                            match self.try_unicode_escape_for_template() {
                                Some(c) => {
                                    raw.push_str(&self.source[escape_start..self.pos]);
                                    cooked_str.push(c);
                                }
                                None => {
                                    cooked = None;
                                    // Resynchronize: consume the bare 'u' and
                                    // continue collecting raw text.
                                    self.bump();
                                    raw.push('u');
                                }
                            }
                        }
                        _ => cooked_str.push(esc),
                    }
                }
                _ if is_line_terminator(c) => {
                    let nl_start = self.pos;
                    self.bump_line();
                    self.newline_pending = false;
                    let mut text = &self.source[nl_start..self.pos];
                    // The spec normalizes <CR> and <CR><LF> to <LF> in both
                    // the raw and cooked template values.
                    if text == "\r\n" || text == "\r" {
                        text = "\n";
                    }
                    raw.push_str(text);
                    if let Some(cooked_str) = cooked.as_mut() {
                        cooked_str.push_str(text);
                    }
                }
                _ => {
                    self.bump();
                    raw.push(c);
                    if let Some(cooked_str) = cooked.as_mut() {
                        cooked_str.push(c);
                    }
                }
            }
        }

        let template = TemplateString {
            raw: raw.into(),
            cooked: cooked.map(String::into_boxed_str),
        };
        let kind = match (head, closed_by_backtick) {
            (true, true) => TokenKind::TemplateNoSubstitution(template),
            (true, false) => TokenKind::TemplateHead(template),
            (false, true) => TokenKind::TemplateTail(template),
            (false, false) => TokenKind::TemplateMiddle(template),
        };
        let span = self.span_from(start_pos, start);
        self.push_token(kind, "", span);
        Ok(())
    }

    /// Attempts to decode a `\u` escape inside a template. The cursor sits on
    /// the `u`. Returns `None` (leaving the cursor on the `u`) when the
    /// escape is malformed, so the template can carry a null cooked value.
    fn try_unicode_escape_for_template(&mut self) -> Option<char> {
        let save = (self.pos, self.line, self.column);
        match self.lex_unicode_escape() {
            Ok(code) => match char::from_u32(code) {
                Some(c) => Some(c),
                None => {
                    (self.pos, self.line, self.column) = save;
                    None
                }
            },
            Err(_) => {
                (self.pos, self.line, self.column) = save;
                None
            }
        }
    }

    /// Consumes the remainder of an undecodable escape into `raw` so the raw
    /// text stays faithful.
    fn skip_escape_tail(&mut self, esc: char, raw: &mut String) {
        if esc == 'x' || esc == 'u' {
            while let Some(c) = self.peek() {
                if c.is_ascii_hexdigit() || c == '{' || c == '}' {
                    self.bump();
                    raw.push(c);
                } else {
                    break;
                }
            }
        }
    }

    // ---- numbers --------------------------------------------------------

    fn lex_number(&mut self) -> Result<(), Error> {
        let start_pos = self.pos;
        let start = self.position();

        let mut flavor = NumericFlavor::Decimal;
        let mut is_bigint = false;

        if self.peek() == Some('0') {
            match self.peek_at(1) {
                Some('x' | 'X') => {
                    self.bump();
                    self.bump();
                    flavor = NumericFlavor::Hex;
                    self.lex_digits(16)?;
                }
                Some('o' | 'O') => {
                    self.bump();
                    self.bump();
                    flavor = NumericFlavor::Octal;
                    self.lex_digits(8)?;
                }
                Some('b' | 'B') => {
                    self.bump();
                    self.bump();
                    flavor = NumericFlavor::Binary;
                    self.lex_digits(2)?;
                }
                Some('0'..='9') => {
                    // Legacy octal, or a non-octal decimal when a digit
                    // outside 0..7 appears.
                    flavor = NumericFlavor::LegacyOctal;
                    self.bump();
                    while let Some(c) = self.peek() {
                        match c {
                            '0'..='7' => {
                                self.bump();
                            }
                            '8' | '9' => {
                                flavor = NumericFlavor::NonOctalDecimal;
                                self.bump();
                            }
                            _ => break,
                        }
                    }
                    // A non-octal `08`-style literal continues as a plain
                    // decimal; a legacy octal one cannot carry a fraction or
                    // exponent.
                    if flavor == NumericFlavor::NonOctalDecimal
                        && matches!(self.peek(), Some('.' | 'e' | 'E'))
                    {
                        self.lex_decimal_tail();
                    }
                }
                _ => {
                    self.lex_decimal_tail();
                }
            }
        } else {
            self.lex_decimal_tail();
        }

        if matches!(
            flavor,
            NumericFlavor::Hex | NumericFlavor::Octal | NumericFlavor::Binary
        ) || (flavor == NumericFlavor::Decimal && self.is_integer_literal(start_pos))
        {
            if self.peek() == Some('n') {
                self.bump();
                is_bigint = true;
            }
        }

        if self.peek().is_some_and(|c| is_ident_start(c) || c.is_ascii_digit()) {
            return Err(self.error("identifier starts immediately after numeric literal"));
        }

        let end = if is_bigint { self.pos - 1 } else { self.pos };
        let text: String = self.source[start_pos..end]
            .chars()
            .filter(|&c| c != '_')
            .collect();
        let value = if is_bigint {
            let digits = match flavor {
                NumericFlavor::Hex => &text[2..],
                NumericFlavor::Octal => &text[2..],
                NumericFlavor::Binary => &text[2..],
                _ => &text[..],
            };
            let radix = match flavor {
                NumericFlavor::Hex => 16,
                NumericFlavor::Octal => 8,
                NumericFlavor::Binary => 2,
                _ => 10,
            };
            let big = num_bigint::BigInt::from_str_radix(digits, radix)
                .map_err(|_| self.error("invalid BigInt literal"))?;
            Numeric::BigInt(big.to_string().into())
        } else {
            let number = match flavor {
                NumericFlavor::Hex => Self::fold_radix(&text[2..], 16.0),
                NumericFlavor::Octal => Self::fold_radix(&text[2..], 8.0),
                NumericFlavor::Binary => Self::fold_radix(&text[2..], 2.0),
                NumericFlavor::LegacyOctal => Self::fold_radix(&text[1..], 8.0),
                NumericFlavor::Decimal | NumericFlavor::NonOctalDecimal => {
                    fast_float2::parse(&text)
                        .map_err(|_| self.error("invalid numeric literal"))?
                }
            };
            Numeric::Number(number)
        };

        let span = self.span_from(start_pos, start);
        self.push_token(TokenKind::NumericLiteral { value, flavor }, "", span);
        Ok(())
    }

    /// Folds digits in the given radix into a double, matching the precision
    /// ECMAScript mandates for doubles.
    fn fold_radix(digits: &str, radix: f64) -> f64 {
        digits.chars().fold(0.0, |acc, c| {
            acc * radix + f64::from(c.to_digit(radix as u32).expect("digits pre-validated"))
        })
    }

    /// Lexes at least one digit of the given radix, with `_` separators.
    fn lex_digits(&mut self, radix: u32) -> Result<(), Error> {
        let mut any = false;
        let mut last_was_separator = false;
        while let Some(c) = self.peek() {
            if c == '_' {
                if !any || last_was_separator {
                    return Err(self.error("invalid numeric separator"));
                }
                last_was_separator = true;
                self.bump();
            } else if c.to_digit(radix).is_some() {
                any = true;
                last_was_separator = false;
                self.bump();
            } else {
                break;
            }
        }
        if !any || last_was_separator {
            return Err(self.error("invalid numeric literal"));
        }
        Ok(())
    }

    /// Lexes the integer/fraction/exponent tail of a decimal literal.
    fn lex_decimal_tail(&mut self) {
        while matches!(self.peek(), Some('0'..='9' | '_')) {
            self.bump();
        }
        if self.peek() == Some('.') {
            self.bump();
            while matches!(self.peek(), Some('0'..='9' | '_')) {
                self.bump();
            }
        }
        if matches!(self.peek(), Some('e' | 'E'))
            && (matches!(self.peek_at(1), Some('0'..='9'))
                || (matches!(self.peek_at(1), Some('+' | '-'))
                    && matches!(self.peek_at(2), Some('0'..='9'))))
        {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            while matches!(self.peek(), Some('0'..='9' | '_')) {
                self.bump();
            }
        }
    }

    /// Whether the decimal literal scanned so far has no fraction and no
    /// exponent, which is what a BigInt suffix requires.
    fn is_integer_literal(&self, start_pos: usize) -> bool {
        !self.source[start_pos..self.pos]
            .contains(|c| matches!(c, '.' | 'e' | 'E'))
    }

    // ---- regular expressions --------------------------------------------

    fn lex_regex(&mut self) -> Result<(), Error> {
        let start_pos = self.pos;
        let start = self.position();
        self.bump(); // '/'

        let pattern_start = self.pos;
        let mut in_class = false;
        loop {
            let Some(c) = self.peek() else {
                return Err(Error::syntax("unterminated regular expression", start));
            };
            if is_line_terminator(c) {
                return Err(Error::syntax("unterminated regular expression", start));
            }
            match c {
                '\\' => {
                    self.bump();
                    let Some(next) = self.peek() else {
                        return Err(Error::syntax("unterminated regular expression", start));
                    };
                    if is_line_terminator(next) {
                        return Err(Error::syntax("unterminated regular expression", start));
                    }
                    self.bump();
                }
                '[' => {
                    in_class = true;
                    self.bump();
                }
                ']' => {
                    in_class = false;
                    self.bump();
                }
                '/' if !in_class => break,
                _ => {
                    self.bump();
                }
            }
        }
        let pattern = &self.source[pattern_start..self.pos];
        self.bump(); // closing '/'

        let flags_start = self.pos;
        while self.peek().is_some_and(is_ident_part) {
            self.bump();
        }
        let flags = &self.source[flags_start..self.pos];
        let mut seen = [false; 128];
        for c in flags.chars() {
            if !matches!(c, 'd' | 'g' | 'i' | 'm' | 's' | 'u' | 'v' | 'y') {
                return Err(self.error("invalid regular expression flag"));
            }
            if std::mem::replace(&mut seen[c as usize], true) {
                return Err(self.error("duplicate regular expression flag"));
            }
        }
        if seen[b'u' as usize] && seen[b'v' as usize] {
            return Err(self.error("regular expression flags 'u' and 'v' are exclusive"));
        }

        let span = self.span_from(start_pos, start);
        self.push_token(
            TokenKind::RegularExpressionLiteral {
                pattern: pattern.into(),
                flags: flags.into(),
            },
            "",
            span,
        );
        Ok(())
    }

    /// Whether a `/` at the current position starts a regular expression
    /// rather than a division operator, judged from the previous significant
    /// token.
    fn regex_allowed(&self) -> bool {
        let Some(token) = self.tokens.last() else {
            return true;
        };
        match token.kind() {
            TokenKind::Identifier
            | TokenKind::PrivateIdentifier
            | TokenKind::BooleanLiteral(_)
            | TokenKind::NullLiteral
            | TokenKind::NumericLiteral { .. }
            | TokenKind::StringLiteral { .. }
            | TokenKind::TemplateNoSubstitution(_)
            | TokenKind::TemplateTail(_)
            | TokenKind::RegularExpressionLiteral { .. } => false,
            TokenKind::Keyword(Keyword::This | Keyword::Super) => false,
            TokenKind::Keyword(_) => true,
            TokenKind::Punctuator(p) => match p {
                Punctuator::CloseParen => self.regex_after_paren,
                Punctuator::CloseBracket | Punctuator::Inc | Punctuator::Dec => false,
                // A `}` usually closes a block, after which a regular
                // expression may begin a new statement.
                _ => true,
            },
            TokenKind::Eof | TokenKind::TemplateHead(_) | TokenKind::TemplateMiddle(_) => true,
        }
    }

    // ---- punctuators ----------------------------------------------------

    fn lex_punctuator(&mut self) -> Result<(), Error> {
        use Punctuator as P;

        let start_pos = self.pos;
        let start = self.position();
        let c = self.peek().expect("caller checked for a character");

        if c == '/' && self.regex_allowed() {
            return self.lex_regex();
        }

        let punct = match c {
            '{' => {
                self.bump();
                self.brace_depth += 1;
                P::OpenBlock
            }
            '}' => {
                self.bump();
                self.brace_depth = self.brace_depth.saturating_sub(1);
                P::CloseBlock
            }
            '(' => {
                self.bump();
                let after_head_keyword = matches!(
                    self.tokens.last().map(Token::kind),
                    Some(TokenKind::Keyword(
                        Keyword::If | Keyword::While | Keyword::For | Keyword::With
                    ))
                );
                self.paren_stack.push(after_head_keyword);
                P::OpenParen
            }
            ')' => {
                self.bump();
                self.regex_after_paren = self.paren_stack.pop().unwrap_or(false);
                P::CloseParen
            }
            '[' => {
                self.bump();
                P::OpenBracket
            }
            ']' => {
                self.bump();
                P::CloseBracket
            }
            ';' => {
                self.bump();
                P::Semicolon
            }
            ',' => {
                self.bump();
                P::Comma
            }
            ':' => {
                self.bump();
                P::Colon
            }
            '~' => {
                self.bump();
                P::Neg
            }
            '.' => {
                self.bump();
                if self.peek() == Some('.') && self.peek_at(1) == Some('.') {
                    self.bump();
                    self.bump();
                    P::Spread
                } else {
                    P::Dot
                }
            }
            '?' => {
                self.bump();
                match self.peek() {
                    Some('?') => {
                        self.bump();
                        if self.peek() == Some('=') {
                            self.bump();
                            P::AssignCoalesce
                        } else {
                            P::Coalesce
                        }
                    }
                    // `?.` followed by a digit is a conditional with a
                    // decimal literal, not optional chaining.
                    Some('.') if !matches!(self.peek_at(1), Some('0'..='9')) => {
                        self.bump();
                        P::Optional
                    }
                    _ => P::Question,
                }
            }
            '<' => {
                self.bump();
                match self.peek() {
                    Some('<') => {
                        self.bump();
                        if self.peek() == Some('=') {
                            self.bump();
                            P::AssignLeftSh
                        } else {
                            P::LeftSh
                        }
                    }
                    Some('=') => {
                        self.bump();
                        P::LessThanOrEq
                    }
                    _ => P::LessThan,
                }
            }
            '>' => {
                self.bump();
                match self.peek() {
                    Some('>') => {
                        self.bump();
                        match self.peek() {
                            Some('>') => {
                                self.bump();
                                if self.peek() == Some('=') {
                                    self.bump();
                                    P::AssignURightSh
                                } else {
                                    P::URightSh
                                }
                            }
                            Some('=') => {
                                self.bump();
                                P::AssignRightSh
                            }
                            _ => P::RightSh,
                        }
                    }
                    Some('=') => {
                        self.bump();
                        P::GreaterThanOrEq
                    }
                    _ => P::GreaterThan,
                }
            }
            '=' => {
                self.bump();
                match self.peek() {
                    Some('=') => {
                        self.bump();
                        if self.peek() == Some('=') {
                            self.bump();
                            P::StrictEq
                        } else {
                            P::Eq
                        }
                    }
                    Some('>') => {
                        self.bump();
                        P::Arrow
                    }
                    _ => P::Assign,
                }
            }
            '!' => {
                self.bump();
                if self.peek() == Some('=') {
                    self.bump();
                    if self.peek() == Some('=') {
                        self.bump();
                        P::StrictNotEq
                    } else {
                        P::NotEq
                    }
                } else {
                    P::Not
                }
            }
            '+' => {
                self.bump();
                match self.peek() {
                    Some('+') => {
                        self.bump();
                        P::Inc
                    }
                    Some('=') => {
                        self.bump();
                        P::AssignAdd
                    }
                    _ => P::Add,
                }
            }
            '-' => {
                self.bump();
                match self.peek() {
                    Some('-') => {
                        self.bump();
                        P::Dec
                    }
                    Some('=') => {
                        self.bump();
                        P::AssignSub
                    }
                    _ => P::Sub,
                }
            }
            '*' => {
                self.bump();
                match self.peek() {
                    Some('*') => {
                        self.bump();
                        if self.peek() == Some('=') {
                            self.bump();
                            P::AssignPow
                        } else {
                            P::Pow
                        }
                    }
                    Some('=') => {
                        self.bump();
                        P::AssignMul
                    }
                    _ => P::Mul,
                }
            }
            '/' => {
                self.bump();
                if self.peek() == Some('=') {
                    self.bump();
                    P::AssignDiv
                } else {
                    P::Div
                }
            }
            '%' => {
                self.bump();
                if self.peek() == Some('=') {
                    self.bump();
                    P::AssignMod
                } else {
                    P::Mod
                }
            }
            '&' => {
                self.bump();
                match self.peek() {
                    Some('&') => {
                        self.bump();
                        if self.peek() == Some('=') {
                            self.bump();
                            P::AssignBoolAnd
                        } else {
                            P::BoolAnd
                        }
                    }
                    Some('=') => {
                        self.bump();
                        P::AssignAnd
                    }
                    _ => P::And,
                }
            }
            '|' => {
                self.bump();
                match self.peek() {
                    Some('|') => {
                        self.bump();
                        if self.peek() == Some('=') {
                            self.bump();
                            P::AssignBoolOr
                        } else {
                            P::BoolOr
                        }
                    }
                    Some('=') => {
                        self.bump();
                        P::AssignOr
                    }
                    _ => P::Or,
                }
            }
            '^' => {
                self.bump();
                if self.peek() == Some('=') {
                    self.bump();
                    P::AssignXor
                } else {
                    P::Xor
                }
            }
            _ => return Err(self.error("unexpected character")),
        };

        let span = self.span_from(start_pos, start);
        self.push_token(TokenKind::Punctuator(punct), punct.as_str(), span);
        Ok(())
    }
}
