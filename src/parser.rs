use crate::ast::{BinaryOp, Expr};
use crate::error::{CalcError, Span};
use crate::lexer::{Token, TokenType};
use tracing::trace;

/// Deepest nesting of sub-expressions a line may have. Every operator, `-`
/// and `(` opens one level, so this also bounds the length of a chain.
pub const MAX_DEPTH: usize = 1000;

/// Recursive-descent parser over an immutable token vector.
///
/// Grammar, with every operator (negation included) at one precedence level
/// and right-associative:
///
/// ```text
/// expr    := primary (OP expr)?
/// primary := '-' expr | NUMBER | '(' expr ')'
/// OP      := '+' | '-' | '*' | '/' | '%'
/// ```
///
/// So `1 - 2 - 3` is `1 - (2 - 3)` and `-1 + 2` is `-(1 + 2)`.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses one expression and requires every token to be consumed.
    pub fn parse(&mut self) -> Result<Expr, CalcError> {
        let expr = self.expression()?;

        if let Some(token) = self.peek() {
            return Err(CalcError::parse_error_with_help(
                token.span.clone(),
                format!("expected end of input but found token `{}`", token.lexeme),
                "Join values with one of the operators + - * / %.".to_string(),
            ));
        }

        trace!(tree = %expr, "parsed expression");
        Ok(expr)
    }

    /// Tokens not consumed yet.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.current..]
    }

    fn expression(&mut self) -> Result<Expr, CalcError> {
        if self.depth >= MAX_DEPTH {
            let span = self.peek().map_or_else(|| self.end_span(), |t| t.span.clone());
            return Err(CalcError::parse_error_with_help(
                span,
                "expression nested too deeply".to_string(),
                format!(
                    "At most {} operators, negations and parentheses can be nested.",
                    MAX_DEPTH
                ),
            ));
        }

        self.depth += 1;
        let result = self.chain();
        self.depth -= 1;
        result
    }

    fn chain(&mut self) -> Result<Expr, CalcError> {
        let left = self.primary()?;

        let operator = match self.peek().and_then(|t| BinaryOp::from_token_type(t.token_type)) {
            Some(operator) => operator,
            None => return Ok(left),
        };
        self.advance();

        // The right operand is the whole rest of the chain.
        let right = self.expression()?;
        let span = Span::new(left.span().start, right.span().end);

        Ok(Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        })
    }

    fn primary(&mut self) -> Result<Expr, CalcError> {
        let token = match self.peek() {
            Some(token) => token.clone(),
            None => {
                return Err(CalcError::parse_error(
                    self.end_span(),
                    "empty expression not allowed".to_string(),
                ))
            }
        };

        match token.token_type {
            TokenType::Minus => {
                self.advance();
                let operand = self.expression()?;
                let span = Span::new(token.span.start, operand.span().end);
                Ok(Expr::Negate {
                    operand: Box::new(operand),
                    span,
                })
            }
            TokenType::Number => {
                self.advance();
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    CalcError::conversion_error_with_help(
                        token.span.clone(),
                        format!("invalid numeric literal `{}`", token.lexeme),
                        "Numbers take at most one '.' and one 'e' exponent, as in 1.5e3."
                            .to_string(),
                    )
                })?;
                Ok(Expr::Number {
                    value,
                    span: token.span,
                })
            }
            TokenType::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume_right_paren(&token)?;
                Ok(expr)
            }
            _ => Err(CalcError::parse_error(
                token.span.clone(),
                format!("unexpected token `{}`", token.lexeme),
            )),
        }
    }

    fn consume_right_paren(&mut self, open: &Token) -> Result<(), CalcError> {
        let help = format!(
            "The '(' at index {} must be closed with ')'.",
            open.span.start
        );

        match self.peek() {
            Some(token) if token.token_type == TokenType::RightParen => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(CalcError::parse_error_with_help(
                token.span.clone(),
                format!("expected `)` but found `{}`", token.lexeme),
                help,
            )),
            None => Err(CalcError::parse_error_with_help(
                self.end_span(),
                "expected `)` but found end of input".to_string(),
                help,
            )),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }

    fn end_span(&self) -> Span {
        let end = self.tokens.last().map_or(0, |t| t.span.end);
        Span::single(end)
    }
}

/// Builds the expression tree for a complete token sequence.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, CalcError> {
    Parser::new(tokens).parse()
}
