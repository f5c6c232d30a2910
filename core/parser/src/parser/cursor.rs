//! Cursor implementation for the parser.
//!
//! The cursor is a bounded random-access view over the lexer's token vector.
//! The vector always ends with an end-of-file sentinel, so every peek is
//! total; peeking past the end keeps returning the sentinel.

use crate::{
    error::{Error, ParseResult},
    lexer::{Keyword, Punctuator, Token, TokenKind},
};

#[derive(Debug)]
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Creates a new cursor over a token vector. The vector must be
    /// terminated by an end-of-file sentinel.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(
            tokens.last().map(Token::kind),
            Some(TokenKind::Eof)
        ));
        Self { tokens, pos: 0 }
    }

    /// Peeks the current token without moving the cursor.
    pub(crate) fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Peeks the token `skip` places after the current one.
    pub(crate) fn peek_at(&self, skip: usize) -> &Token {
        let index = (self.pos + skip).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Moves the cursor to the next token and returns the consumed one.
    ///
    /// The end-of-file sentinel is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if !matches!(token.kind(), TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Gets the most recently consumed token.
    ///
    /// # Panics
    ///
    /// Panics if no token has been consumed yet.
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    /// Whether the cursor sits on the end-of-file sentinel.
    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek().kind(), TokenKind::Eof)
    }

    /// The current token index, the base of a lookahead scan.
    pub(crate) fn index(&self) -> usize {
        self.pos
    }

    /// Direct access to the token at an absolute index, for lookahead scans.
    pub(crate) fn token_at(&self, index: usize) -> &Token {
        let index = index.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Whether the current token is the given punctuator.
    pub(crate) fn check(&self, punct: Punctuator) -> bool {
        self.peek().kind() == &TokenKind::Punctuator(punct)
    }

    /// Whether the current token is the given keyword.
    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().kind() == &TokenKind::Keyword(keyword)
    }

    /// Whether the current token is an identifier spelling `word`, escapes
    /// permitted.
    pub(crate) fn check_identifier(&self, word: &str) -> bool {
        matches!(self.peek().kind(), TokenKind::Identifier) && self.peek().lexeme() == word
    }

    /// Whether the current token is the contextual keyword `word`: an
    /// identifier with the exact spelling and no escape sequences.
    ///
    /// Contextual keywords written with escapes do not act as keywords, so
    /// `of` never starts the `of` clause of a loop.
    pub(crate) fn check_contextual(&self, word: &str) -> bool {
        self.check_identifier(word) && !self.peek().contains_escapes()
    }

    /// Consumes the current token if it is the given punctuator.
    pub(crate) fn eat(&mut self, punct: Punctuator) -> bool {
        if self.check(punct) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is the contextual keyword `word`.
    pub(crate) fn eat_contextual(&mut self, word: &str) -> bool {
        if self.check_contextual(word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Returns an error if the current token is not the given punctuator.
    ///
    /// It consumes the token when it matches.
    pub(crate) fn expect(&mut self, punct: Punctuator, context: &'static str) -> ParseResult<Token> {
        if self.check(punct) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(Error::expected(
                vec![punct.as_str().to_owned()],
                token.display(),
                token.span(),
                context,
            ))
        }
    }

    /// Returns an error if the current token is not the given keyword, or is
    /// the keyword written with Unicode escapes, which never acts as a
    /// keyword.
    ///
    /// It consumes the token when it matches.
    pub(crate) fn expect_keyword(
        &mut self,
        keyword: Keyword,
        context: &'static str,
    ) -> ParseResult<Token> {
        if self.check_keyword(keyword) {
            let token = self.peek();
            if token.contains_escapes() {
                return Err(Error::general(
                    "keywords must not contain escaped characters",
                    token.span().loc.start,
                ));
            }
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(Error::expected(
                vec![keyword.as_str().to_owned()],
                token.display(),
                token.span(),
                context,
            ))
        }
    }

    /// It will check if a semicolon terminates the statement here, inserting
    /// one automatically if the [spec][spec] permits.
    ///
    /// ASI applies when the next token is `}` or the end of the file, when a
    /// line terminator precedes it, or when the next token can only begin a
    /// new statement (`import`, `export`, `function`, `class`, `const`,
    /// `let`, `var`).
    ///
    /// [spec]: https://tc39.es/ecma262/#sec-automatic-semicolon-insertion
    pub(crate) fn consume_semicolon(&mut self, context: &'static str) -> ParseResult<()> {
        if self.eat(Punctuator::Semicolon) {
            return Ok(());
        }
        let token = self.peek();
        let insertable = match token.kind() {
            TokenKind::Eof | TokenKind::Punctuator(Punctuator::CloseBlock) => true,
            _ if token.newline_before() => true,
            TokenKind::Keyword(
                Keyword::Import
                | Keyword::Export
                | Keyword::Function
                | Keyword::Class
                | Keyword::Const
                | Keyword::Var,
            ) => true,
            TokenKind::Identifier => token.lexeme() == "let",
            _ => false,
        };
        if insertable {
            Ok(())
        } else {
            Err(Error::expected(
                vec![";".to_owned()],
                token.display(),
                token.span(),
                context,
            ))
        }
    }

    /// Returns an error if a line terminator precedes the current token.
    /// Used for the restricted productions, such as postfix `++`.
    pub(crate) fn expect_no_newline(&mut self, context: &'static str) -> ParseResult<()> {
        let token = self.peek();
        if token.newline_before() {
            Err(Error::unexpected(token.display(), token.span(), context))
        } else {
            Ok(())
        }
    }
}
