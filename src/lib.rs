//! strcalc: sum a delimited string of numbers
//!
//! ```
//! assert_eq!(strcalc::add("//;\n1;2").unwrap(), 3);
//! assert_eq!(strcalc::add("2,1001,13").unwrap(), 15);
//! ```

pub use strcalc_ast::{CalcError, DelimiterSet, ErrorKind, Sequence, SourceMap, Span, Spanned};
pub use strcalc_evaluator::{Calculator, CalculatorConfig, DEFAULT_UPPER_BOUND, add};
pub use strcalc_lexer::{Lexer, Token};
pub use strcalc_parser::Parser;
