use crate::error::LogicError;
use crate::eval::{Assignment, EvalState};
use crate::lexer::{read, ReadResult};
use crate::rpn::to_rpn;
use crate::token::TokenKind;
use log::debug;
use std::fmt;

/// Most free variables a table can enumerate: one less than the bit width
/// of `usize`.
pub const MAX_VARIABLES: usize = usize::BITS as usize - 1;

/// All `2^variables` assignments, all-true first and all-false last.
/// Column `i` is the `i`-th variable; zero variables give one empty row.
/// `None` above [`MAX_VARIABLES`].
pub fn generate_rows(variables: usize) -> Option<Vec<Vec<bool>>> {
	if variables > MAX_VARIABLES {
		return None;
	}
	let total = 1usize.checked_shl(u32::try_from(variables).ok()?)?;
	let rows = (0..total)
		.rev()
		.map(|value| {
			(0..variables)
				.map(|column| (value >> (variables - 1 - column)) & 1 == 1)
				.collect()
		})
		.collect();
	Some(rows)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TruthTable {
	pub variables: Vec<String>,
	pub assignments: Vec<Vec<bool>>,
	pub results: Vec<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TruthTableRow<'a> {
	pub assignment: &'a [bool],
	pub result: bool,
}

impl TruthTable {
	pub fn rows(&self) -> impl Iterator<Item = TruthTableRow<'_>> {
		self.assignments
			.iter()
			.zip(self.results.iter())
			.map(|(assignment, result)| TruthTableRow {
				assignment: assignment.as_slice(),
				result: *result,
			})
	}

	pub fn is_empty(&self) -> bool {
		self.results.is_empty()
	}

	pub fn is_tautology(&self) -> bool {
		!self.is_empty() && self.results.iter().all(|result| *result)
	}

	pub fn is_contradiction(&self) -> bool {
		!self.is_empty() && self.results.iter().all(|result| !*result)
	}

	pub fn is_satisfiable(&self) -> bool {
		self.results.iter().any(|result| *result)
	}
}

impl fmt::Display for TruthTable {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let cell = |value: bool| if value { "T" } else { "F" };
		for name in &self.variables {
			write!(f, "{} ", name)?;
		}
		writeln!(f, "|")?;
		for row in self.rows() {
			for (name, value) in self.variables.iter().zip(row.assignment) {
				write!(f, "{:<width$} ", cell(*value), width = name.len())?;
			}
			writeln!(f, "| {}", cell(row.result))?;
		}
		Ok(())
	}
}

/// Evaluates an RPN expression under every assignment of its free
/// variables. An empty expression gives an empty table; the first failing
/// row aborts the whole table. More than [`MAX_VARIABLES`] free variables
/// fail with [`LogicError::TooManyVariables`].
pub fn evaluate(rpn: ReadResult) -> Result<TruthTable, LogicError> {
	if rpn.tokens.is_empty() {
		return Ok(TruthTable {
			variables: rpn.free_variables,
			..TruthTable::default()
		});
	}

	let assignments = match generate_rows(rpn.free_variables.len()) {
		Some(assignments) => assignments,
		None => return Err(too_many_variables(&rpn)),
	};
	debug!("evaluating {} rows over {:?}", assignments.len(), rpn.free_variables);
	let results = assignments
		.iter()
		.map(|row| {
			let variables: Assignment = rpn.free_variables.iter().cloned().zip(row.iter().copied()).collect();
			let state = EvalState::new(&rpn.tokens).reduce(&variables)?;
			// a non-empty expression always leaves a value behind
			state.result().ok_or(LogicError::MissingOperand {
				position: rpn.position,
			})
		})
		.collect::<Result<Vec<bool>, LogicError>>()?;

	Ok(TruthTable {
		variables: rpn.free_variables,
		assignments,
		results,
	})
}

// points at the first occurrence of the variable past the limit
fn too_many_variables(rpn: &ReadResult) -> LogicError {
	let extra = &rpn.free_variables[MAX_VARIABLES];
	let position = rpn
		.tokens
		.iter()
		.filter(|token| token.kind == TokenKind::Variable && &token.symbol == extra)
		.map(|token| token.position)
		.min()
		.unwrap_or(rpn.position);
	LogicError::TooManyVariables {
		count: rpn.free_variables.len(),
		position,
	}
}

/// Reads, converts and evaluates `source` in one go. Same limits as
/// [`evaluate`].
pub fn truth_table(source: &str) -> Result<TruthTable, LogicError> {
	read(source).and_then(to_rpn).and_then(evaluate)
}

#[cfg(test)]
mod test {
	use super::*;
	use test_log::test;

	#[test]
	fn test_generate_rows() {
		assert_eq!(generate_rows(0), Some(vec![Vec::<bool>::new()]));
		assert_eq!(generate_rows(1), Some(vec![vec![true], vec![false]]));
		assert_eq!(
			generate_rows(2),
			Some(vec![vec![true, true], vec![true, false], vec![false, true], vec![false, false]])
		);
		let rows = generate_rows(4).unwrap();
		assert_eq!(rows.len(), 16);
		assert_eq!(rows[0], vec![true; 4]);
		assert_eq!(rows[15], vec![false; 4]);
		assert_eq!(rows[1], vec![true, true, true, false]);
	}

	#[test]
	fn test_connectives() {
		assert_eq!(truth_table("a").unwrap().results, vec![true, false]);
		assert_eq!(truth_table("a & b").unwrap().results, vec![true, false, false, false]);
		assert_eq!(truth_table("a | b").unwrap().results, vec![true, true, true, false]);
		assert_eq!(truth_table("a > b").unwrap().results, vec![true, false, true, true]);
		assert_eq!(truth_table("a = b").unwrap().results, vec![true, false, false, true]);
	}

	#[test]
	fn test_constants_only() {
		let table = truth_table("T & !C").unwrap();
		assert!(table.variables.is_empty());
		assert_eq!(table.assignments, vec![Vec::<bool>::new()]);
		assert_eq!(table.results, vec![true]);
	}

	#[test]
	fn test_empty_expression() {
		assert_eq!(truth_table("").unwrap(), TruthTable::default());
		assert_eq!(truth_table("()").unwrap(), TruthTable::default());
	}

	#[test]
	fn test_first_error_aborts() {
		assert_eq!(
			truth_table("a > "),
			Err(LogicError::MissingOperand { position: 2 })
		);
	}

	#[test]
	fn test_row_limit() {
		assert_eq!(generate_rows(MAX_VARIABLES + 1), None);
		assert_eq!(generate_rows(usize::MAX), None);
	}

	#[test]
	fn test_too_many_variables() {
		let names: Vec<String> = (0..=MAX_VARIABLES)
			.map(|i| {
				let first = char::from(b'a' + (i / 26) as u8);
				let second = char::from(b'a' + (i % 26) as u8);
				format!("{}{}", first, second)
			})
			.collect();
		let source = names.join(" & ");
		let rpn = read(&source).and_then(to_rpn).unwrap();
		let extra = rpn
			.tokens
			.iter()
			.find(|token| token.symbol == names[MAX_VARIABLES])
			.unwrap()
			.position;
		assert_eq!(
			evaluate(rpn),
			Err(LogicError::TooManyVariables {
				count: MAX_VARIABLES + 1,
				position: extra
			})
		);
		assert_eq!(truth_table(&source).unwrap_err().position(), extra);
	}

	#[test]
	fn test_classification() {
		assert!(truth_table("a | !a").unwrap().is_tautology());
		assert!(truth_table("a & !a").unwrap().is_contradiction());
		let table = truth_table("a & b").unwrap();
		assert!(table.is_satisfiable());
		assert!(!table.is_tautology());
		assert!(!TruthTable::default().is_satisfiable());
	}

	#[test]
	fn test_display() {
		let table = truth_table("ab > c").unwrap();
		let text = table.to_string();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 5);
		assert_eq!(lines[0], "ab c |");
		assert_eq!(lines[1], "T  T | T");
		assert_eq!(lines[2], "T  F | F");
		assert_eq!(lines[4], "F  F | T");
	}
}
