use crate::ast::{Block, Prop, Sheet, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

/// Grammar:
///
/// ```text
/// sheet := block*
/// block := Ident "{" prop* "}"
/// prop  := Ident ":" value
/// value := Str | Number | Color | Ident
/// ```
pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, self.peek())))
        }
    }

    // ── Sheet ─────────────────────────────────────────────────────────────

    pub fn parse_sheet(&mut self) -> Result<Sheet, ParseError> {
        let mut blocks = Vec::new();
        while self.peek() != &Token::Eof {
            blocks.push(self.parse_block()?);
        }
        Ok(Sheet { blocks })
    }

    // ── Block ─────────────────────────────────────────────────────────────

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let name = match self.peek() {
            Token::Ident(s) => s.clone(),
            tok => return Err(self.err(format!("expected a block name, got {:?}", tok))),
        };
        self.advance();
        self.expect(&Token::LBrace)?;

        let mut props = Vec::new();
        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(self.err(format!("unclosed '{{' block for {name}"))),
                Token::Ident(_) => props.push(self.parse_prop()?),
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside block, expected `key: value`",
                        tok
                    )));
                }
            }
        }

        Ok(Block { name, props })
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, col) = self.current_pos();
        let Token::Ident(key) = self.advance() else {
            return Err(ParseError::new("expected a property name", line, col));
        };
        self.expect(&Token::Colon)?;
        let value = self.parse_value()?;
        Ok(Prop { key, value, line, col })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let err = self.err("");
        match self.advance() {
            Token::Str(s) => Ok(Value::Str(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::Color(c) => Ok(Value::Color(c)),
            Token::Ident(s) => Ok(Value::Ident(s)),
            tok => Err(ParseError { message: format!("expected a value, got {:?}", tok), ..err }),
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse an attribute sheet into a [`Sheet`].
pub fn parse_str(src: &str) -> Result<Sheet, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_sheet()
}
