//! Tokenizer and parser for the textual input accepted by mathsolver: a single arithmetic /
//! trigonometric expression, or an equation of two expressions separated by `=`.
//!
//! ```
//! use mathsolver_parser::parser::{ast::Input, Parser};
//!
//! let input = Parser::new("2x + 3 = 7").try_parse_full::<Input>().unwrap();
//! assert!(matches!(input, Input::Equation { .. }));
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{ast::Input, Parser};

/// Parses the complete input string into an [`Input`].
pub fn parse_input(source: &str) -> Result<Input, mathsolver_error::Error> {
    Parser::new(source).try_parse_full::<Input>()
}
