//! Lexer, parser and expression tree for `symcalc`.
//!
//! ```
//! use symcalc_parser::{parse, expr::Expr};
//!
//! let expr = parse("3 - 2").unwrap();
//! assert_eq!(expr, Expr::sub(Expr::number(3.0), Expr::number(2.0)));
//! assert_eq!(expr.as_functional().to_string(), "Sub(3, 2)");
//! ```

pub mod expr;
pub mod parser;
pub mod tokenizer;

pub use expr::Expr;
pub use parser::{parse, parse_with, ParseOptions};
