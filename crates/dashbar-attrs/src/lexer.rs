use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    Number(f32),
    /// Color literal: `[r, g, b, a]` straight-alpha bytes.
    Color([u8; 4]),
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Sentinel
    Eof,
}

/// A token with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.rest().starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if self.rest().starts_with("/*") {
                let (line, col) = (self.line, self.col);
                self.advance();
                self.advance();
                loop {
                    if self.rest().starts_with("*/") {
                        self.advance();
                        self.advance();
                        break;
                    }
                    if self.advance().is_none() {
                        return Err(ParseError::new("unterminated block comment", line, col));
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            '"' => self.lex_string(),
            '#' => self.lex_color(),
            c if c.is_ascii_digit() || c == '-' || c == '.' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident()),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    fn lex_string(&mut self) -> Result<Token, ParseError> {
        let (line, col) = (self.line, self.col);
        self.advance(); // consume opening `"`
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(ParseError::new("unterminated string literal", line, col)),
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some(c) => s.push(c),
                    None => return Err(ParseError::new("unterminated escape sequence", line, col)),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Str(s))
    }

    fn lex_color(&mut self) -> Result<Token, ParseError> {
        let err_at = self.err("");
        self.advance(); // consume `#`
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.advance();
        }
        let hex = &self.src[start..self.pos];
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseError {
                message: format!("color literal must be #rrggbb or #rrggbbaa, got {} digits", hex.len()),
                ..err_at
            });
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parsed = (byte(0), byte(2), byte(4), if hex.len() == 8 { byte(6) } else { Ok(255) });
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Token::Color([r, g, b, a])),
            _ => Err(ParseError { message: format!("invalid color literal #{hex}"), ..err_at }),
        }
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let err_at = self.err("");
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        let s = &self.src[start..self.pos];
        s.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| ParseError { message: format!("invalid number {:?}", s), ..err_at })
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }
}
