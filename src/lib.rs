//! Truth tables for propositional logic expressions.
//!
//! An expression is made of lowercase variables, the constants `T` and `C`,
//! the connectives `!`, `&`, `|`, `>` and `=`, and parentheses. It goes
//! through three stages, each returning the first error it finds:
//!
//! ```
//! use proptable::{evaluate, read, to_rpn};
//!
//! let table = read("a > b").and_then(to_rpn).and_then(evaluate).unwrap();
//! assert_eq!(table.results, vec![true, false, true, true]);
//! ```
//!
//! `&` splits before `|`, so `a | b & c` reads as `(a | b) & c`; `>` and `=`
//! bind loosest.

pub mod error;
pub mod eval;
pub mod lexer;
pub mod rpn;
pub mod token;
pub mod tree;
pub mod truth_table;

pub use error::LogicError;
pub use eval::{evaluate_rpn, Assignment, EvalState};
pub use lexer::{read, read_from, ReadResult};
pub use rpn::to_rpn;
pub use token::{Connective, Parenthesis, Token, TokenKind, Value};
pub use tree::Node;
pub use truth_table::{evaluate, generate_rows, truth_table, TruthTable, TruthTableRow, MAX_VARIABLES};
