//! Recursive-descent parser over the token stream.
//!
//! The parser holds a single token of lookahead and a stack of the containers
//! that are currently open. The stack doubles as the depth guard and tells an
//! end-of-input error which bracket was left unclosed.

use crate::{
    error::{Container, DecodeError, ErrorKind},
    lexer::{Keyword, Lexer, Token, TokenKind},
    number::Number,
    options::DecoderOptions,
    scanner::Position,
    value::{Array, Map, Value},
};

pub(crate) struct Parser<'src> {
    lexer: Lexer<'src>,
    peeked: Option<Token>,
    open: Vec<Container>,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src [u8], options: &DecoderOptions) -> Self {
        Self {
            lexer: Lexer::new(src),
            peeked: None,
            open: Vec::new(),
            max_depth: options.max_depth,
        }
    }

    /// Parses one root value and requires nothing but trivia after it.
    pub fn parse(mut self) -> Result<Value, DecodeError> {
        let value = self.parse_value("a value")?;
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Eof => Ok(value),
            _ => Err(DecodeError::new(ErrorKind::TrailingCharacters, token.pos)),
        }
    }

    fn next_token(&mut self) -> Result<Token, DecodeError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lexer.lex(),
        }
    }

    fn peek_token(&mut self) -> Result<&Token, DecodeError> {
        let token = self.next_token()?;
        Ok(self.peeked.insert(token))
    }

    /// Consumes the next token if it is `punct`.
    fn eat_punct(&mut self, punct: u8) -> Result<bool, DecodeError> {
        let hit = self.peek_token()?.kind == TokenKind::Punctuator(punct);
        if hit {
            self.peeked = None;
        }
        Ok(hit)
    }

    /// The error for `found` at `pos` where the grammar wanted `expected`.
    ///
    /// Running out of input inside a container names the innermost one.
    fn unexpected(&self, found: &TokenKind, pos: Position, expected: &'static str) -> DecodeError {
        let kind = match (found, self.open.last()) {
            (TokenKind::Eof, Some(&container)) => ErrorKind::UnterminatedContainer(container),
            (TokenKind::Eof, None) => ErrorKind::UnexpectedEndOfInput,
            (found, _) => ErrorKind::UnexpectedToken {
                expected,
                found: found.to_string(),
            },
        };
        DecodeError::new(kind, pos)
    }

    fn enter(&mut self, container: Container, pos: Position) -> Result<(), DecodeError> {
        if self.open.len() >= self.max_depth {
            return Err(DecodeError::new(
                ErrorKind::DepthLimitExceeded(self.max_depth),
                pos,
            ));
        }
        self.open.push(container);
        Ok(())
    }

    fn leave(&mut self) {
        self.open.pop();
    }

    fn parse_value(&mut self, expected: &'static str) -> Result<Value, DecodeError> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Punctuator(b'{') => self.parse_object(token.pos),
            TokenKind::Punctuator(b'[') => self.parse_array(token.pos),
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::Number(n) => Ok(Value::Number(n)),
            TokenKind::Keyword(keyword) => Ok(match keyword {
                Keyword::True => Value::Bool(true),
                Keyword::False => Value::Bool(false),
                Keyword::Null => Value::Null,
                Keyword::Infinity => Value::Number(Number::Float(f64::INFINITY)),
                Keyword::NaN => Value::Number(Number::Float(f64::NAN)),
            }),
            ref kind => Err(self.unexpected(kind, token.pos, expected)),
        }
    }

    fn parse_array(&mut self, start: Position) -> Result<Value, DecodeError> {
        self.enter(Container::Array, start)?;
        let mut items = Array::new();
        loop {
            // Also covers the trailing comma.
            if self.eat_punct(b']')? {
                break;
            }
            items.push(self.parse_value("a value or ']'")?);

            let token = self.next_token()?;
            match token.kind {
                TokenKind::Punctuator(b',') => {}
                TokenKind::Punctuator(b']') => break,
                ref kind => return Err(self.unexpected(kind, token.pos, "',' or ']'")),
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self, start: Position) -> Result<Value, DecodeError> {
        self.enter(Container::Object, start)?;
        let mut members = Map::new();
        loop {
            let token = self.next_token()?;
            let key = match token.kind {
                TokenKind::Punctuator(b'}') => break,
                TokenKind::String(key) | TokenKind::Identifier(key) => key,
                TokenKind::Keyword(keyword) => keyword.as_str().to_owned(),
                ref kind => {
                    return Err(self.unexpected(kind, token.pos, "a property name or '}'"));
                }
            };

            let token = self.next_token()?;
            if token.kind != TokenKind::Punctuator(b':') {
                return Err(self.unexpected(&token.kind, token.pos, "':'"));
            }

            let value = self.parse_value("a value")?;
            // A repeated key keeps its first slot and takes the new value.
            members.insert(key, value);

            let token = self.next_token()?;
            match token.kind {
                TokenKind::Punctuator(b',') => {}
                TokenKind::Punctuator(b'}') => break,
                ref kind => return Err(self.unexpected(kind, token.pos, "',' or '}'")),
            }
        }
        self.leave();
        Ok(Value::Object(members))
    }
}
