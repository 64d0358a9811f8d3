use thiserror::Error;

/// Everything that can go wrong between reading a string and evaluating it.
/// Each kind carries the character offset of the offending token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogicError {
	#[error("unexpected character {character:?} at {position}")]
	UnexpectedCharacter { character: char, position: usize },

	#[error("parenthesis opened at {position} is never closed")]
	UnclosedParenthesis { position: usize },

	#[error("closing parenthesis at {position} has no opening match")]
	UnmatchedClosingParenthesis { position: usize },

	#[error("connective at {position} is missing an operand")]
	MissingOperand { position: usize },

	/// The variable at `position` pushes the row count past `usize`.
	#[error("{count} free variables, the variable at {position} is one too many")]
	TooManyVariables { count: usize, position: usize },
}

impl LogicError {
	pub fn position(&self) -> usize {
		match *self {
			LogicError::UnexpectedCharacter { position, .. }
			| LogicError::UnclosedParenthesis { position }
			| LogicError::UnmatchedClosingParenthesis { position }
			| LogicError::MissingOperand { position }
			| LogicError::TooManyVariables { position, .. } => position,
		}
	}
}
