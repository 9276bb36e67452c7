// simplecalc library
//
// An arithmetic expression calculator where every operator has the same
// precedence and groups to the right. The pipeline is tokenize -> parse ->
// evaluate; the REPL and runner are thin layers over it.

pub mod ast;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod runner;
pub mod value;

pub use ast::{BinaryOp, Expr};
pub use config::Config;
pub use error::{CalcError, ErrorKind, Span};
pub use evaluator::evaluate;
pub use lexer::{tokenize, Lexer, Token, TokenType};
pub use parser::{parse, Parser};
pub use value::format_number;

pub use repl::start as start_repl;
pub use runner::run;

/// Runs the whole pipeline over one line of input.
pub fn calculate(source: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(source)?;
    let expr = parse(tokens)?;
    Ok(evaluate(&expr))
}
