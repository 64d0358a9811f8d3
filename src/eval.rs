use crate::error::LogicError;
use crate::token::{Token, TokenKind};
use log::trace;
use std::collections::HashMap;

/// Truth value of each free variable, by name.
pub type Assignment = HashMap<String, bool>;

/// An RPN expression being reduced: the tokens not consumed yet and the
/// values computed so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalState<'a> {
	remaining: &'a [Token],
	stack: Vec<bool>,
}

impl<'a> EvalState<'a> {
	pub fn new(expression: &'a [Token]) -> EvalState<'a> {
		EvalState {
			remaining: expression,
			stack: Vec::new(),
		}
	}

	pub fn remaining(&self) -> &'a [Token] {
		self.remaining
	}

	pub fn stack(&self) -> &[bool] {
		&self.stack
	}

	pub fn is_done(&self) -> bool {
		self.remaining.is_empty()
	}

	/// Consumes the next token. Unknown variables read as false.
	pub fn step(&mut self, variables: &Assignment) -> Result<(), LogicError> {
		let (token, rest) = match self.remaining.split_first() {
			Some(split) => split,
			None => return Ok(()),
		};
		match token.kind {
			TokenKind::Variable => {
				let value = variables.get(&token.symbol).copied().unwrap_or(false);
				self.stack.push(value);
			}
			TokenKind::Value(value) => self.stack.push(value.truth()),
			TokenKind::Connective(connective) if connective.is_unary() => {
				let operand = self.stack.pop().ok_or(LogicError::MissingOperand {
					position: token.position,
				})?;
				self.stack.push(!operand);
			}
			TokenKind::Connective(connective) => {
				if self.stack.len() < 2 {
					return Err(LogicError::MissingOperand {
						position: token.position,
					});
				}
				let b = self.stack.pop().unwrap_or_default();
				let a = self.stack.pop().unwrap_or_default();
				self.stack.push(connective.apply(a, b));
			}
			// flattened trees carry no parentheses
			TokenKind::Parenthesis(_) => {}
		}
		trace!("{} -> {:?}", token.symbol, self.stack);
		self.remaining = rest;
		Ok(())
	}

	pub fn reduce(mut self, variables: &Assignment) -> Result<EvalState<'a>, LogicError> {
		while !self.is_done() {
			self.step(variables)?;
		}
		Ok(self)
	}

	/// Top of the stack, `None` while nothing has been pushed.
	pub fn result(&self) -> Option<bool> {
		self.stack.last().copied()
	}
}

/// Value of an RPN expression under `variables`, `None` for an empty one.
pub fn evaluate_rpn(expression: &[Token], variables: &Assignment) -> Result<Option<bool>, LogicError> {
	Ok(EvalState::new(expression).reduce(variables)?.result())
}
