use crate::error::{CalcError, Span};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Single-character tokens
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Literals
    Number,
}

/// A lexeme and where it came from. The span is only used for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: String, span: Span) -> Self {
        Self {
            token_type,
            lexeme,
            span,
        }
    }
}

pub struct Lexer {
    source: String,
    chars: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(source: String) -> Self {
        let chars = source.chars().collect();
        Self {
            source,
            chars,
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    pub fn scan_tokens(&mut self) -> Result<Vec<Token>, CalcError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        debug!(count = self.tokens.len(), "tokenized input");
        Ok(std::mem::take(&mut self.tokens))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn scan_token(&mut self) -> Result<(), CalcError> {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '+' => self.add_token(TokenType::Plus),
            '-' => self.add_token(TokenType::Minus),
            '*' => self.add_token(TokenType::Star),
            '/' => self.add_token(TokenType::Slash),
            '%' => self.add_token(TokenType::Percent),
            c if c.is_whitespace() => {}
            c if c.is_ascii_digit() => self.number(),
            _ => {
                let index = self.current - 1;
                return Err(CalcError::tokenization_error(
                    Span::single(index),
                    format!(
                        "tokenization error on character `{}` at index {} in input `{}`",
                        c, index, self.source
                    ),
                ));
            }
        }

        Ok(())
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    // Digits, dots and a lowercase `e`, in any order. Whether the run is a
    // real float is decided when the parser converts it.
    fn number(&mut self) {
        while matches!(self.peek(), '0'..='9' | '.' | 'e') {
            self.advance();
        }

        self.add_token(TokenType::Number);
    }

    fn add_token(&mut self, token_type: TokenType) {
        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(
            token_type,
            lexeme,
            Span::new(self.start, self.current),
        ));
    }
}

/// Splits `source` into tokens, left to right, skipping whitespace.
pub fn tokenize(source: &str) -> Result<Vec<Token>, CalcError> {
    Lexer::new(source.to_string()).scan_tokens()
}
