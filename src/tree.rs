use crate::error::LogicError;
use crate::token::{Parenthesis, Token, TokenKind};
use log::debug;
use std::fmt;

/// Expression tree node. Content and children are fixed at construction.
/// A complement node only has a right child, the operand that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	content: Token,
	left: Option<Box<Node>>,
	right: Option<Box<Node>>,
}

impl Node {
	pub fn leaf(content: Token) -> Node {
		Node {
			content,
			left: None,
			right: None,
		}
	}

	pub fn branch(content: Token, left: Option<Node>, right: Option<Node>) -> Node {
		Node {
			content,
			left: left.map(Box::new),
			right: right.map(Box::new),
		}
	}

	pub fn content(&self) -> &Token {
		&self.content
	}

	pub fn left(&self) -> Option<&Node> {
		self.left.as_deref()
	}

	pub fn right(&self) -> Option<&Node> {
		self.right.as_deref()
	}

	/// Builds the tree of `tokens`, reporting misplaced parentheses.
	/// An empty range builds no node.
	pub fn build(tokens: &[Token]) -> Result<Option<Node>, LogicError> {
		let first = match tokens.first() {
			Some(first) => first,
			None => return Ok(None),
		};
		match first.kind {
			TokenKind::Parenthesis(Parenthesis::Left) => {
				let close = find_matching_paren(tokens, 0).ok_or(LogicError::UnclosedParenthesis {
					position: first.position,
				})?;
				if close == tokens.len() - 1 {
					return Node::build(&tokens[1..close]);
				}
			}
			TokenKind::Parenthesis(Parenthesis::Right) => {
				return Err(LogicError::UnmatchedClosingParenthesis {
					position: first.position,
				});
			}
			_ => {}
		}

		match find_connective(tokens)? {
			Some(split) => {
				debug!("split on {:?} at {}", tokens[split].symbol, tokens[split].position);
				let left = Node::build(&tokens[..split]);
				let right = Node::build(&tokens[split + 1..]);
				// the left branch's error wins
				match (left, right) {
					(Ok(left), Ok(right)) => Ok(Some(Node::branch(tokens[split].clone(), left, right))),
					(Err(e), _) | (_, Err(e)) => Err(e),
				}
			}
			None => Node::build_operand(tokens),
		}
	}

	// no connective outside groups: the first operand is all there is
	fn build_operand(tokens: &[Token]) -> Result<Option<Node>, LogicError> {
		let first = &tokens[0];
		if first.is_paren(Parenthesis::Left) {
			match find_matching_paren(tokens, 0) {
				Some(close) => Node::build(&tokens[1..close]),
				None => Err(LogicError::UnclosedParenthesis {
					position: first.position,
				}),
			}
		} else {
			Ok(Some(Node::leaf(first.clone())))
		}
	}

	/// Same shape as [`Node::build`], for input already known to be valid.
	/// Misplaced parentheses are skipped instead of reported.
	pub fn build_optimistic(tokens: &[Token]) -> Option<Node> {
		let first = tokens.first()?;
		if first.is_paren(Parenthesis::Right) {
			return Node::build_optimistic(&tokens[1..]);
		}
		if first.is_paren(Parenthesis::Left) {
			if let Some(close) = find_matching_paren(tokens, 0) {
				if close == tokens.len() - 1 {
					return Node::build_optimistic(&tokens[1..close]);
				}
			}
		}

		match find_connective(tokens).ok().flatten() {
			Some(split) => Some(Node::branch(
				tokens[split].clone(),
				Node::build_optimistic(&tokens[..split]),
				Node::build_optimistic(&tokens[split + 1..]),
			)),
			None if first.is_paren(Parenthesis::Left) => {
				let close = find_matching_paren(tokens, 0).unwrap_or(tokens.len());
				Node::build_optimistic(&tokens[1..close])
			}
			None => Some(Node::leaf(first.clone())),
		}
	}

	/// Post-order traversal: left, right, then the node itself.
	pub fn flatten(&self) -> Vec<Token> {
		let mut result = Vec::new();
		self.flatten_into(&mut result);
		result
	}

	fn flatten_into(&self, result: &mut Vec<Token>) {
		if let Some(left) = &self.left {
			left.flatten_into(result);
		}
		if let Some(right) = &self.right {
			right.flatten_into(result);
		}
		result.push(self.content.clone());
	}

	fn to_string_recurse(&self) -> String {
		let child = |node: &Option<Box<Node>>| node.as_ref().map(|n| n.to_string_recurse()).unwrap_or_default();
		match self.content.connective() {
			Some(connective) if connective.is_unary() => format!("!{}", child(&self.right)),
			Some(connective) => format!("{}({} {})", connective.symbol(), child(&self.left), child(&self.right)),
			None => self.content.symbol.clone(),
		}
	}
}

/// Prefix form, e.g. `=(a &(!b c))`.
impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.to_string_recurse())
	}
}

/// Index of the right parenthesis closing the one at `from`, or `None` if
/// the range ends first.
pub fn find_matching_paren(tokens: &[Token], from: usize) -> Option<usize> {
	let mut open = 1usize;
	for (index, token) in tokens.iter().enumerate().skip(from + 1) {
		match token.kind {
			TokenKind::Parenthesis(Parenthesis::Left) => open += 1,
			TokenKind::Parenthesis(Parenthesis::Right) => {
				open -= 1;
				if open == 0 {
					return Some(index);
				}
			}
			_ => {}
		}
	}
	None
}

/// Index of the connective that heads `tokens`: the highest precedence
/// number outside any group, first occurrence on ties. `None` if the range
/// holds no such connective.
pub fn find_connective(tokens: &[Token]) -> Result<Option<usize>, LogicError> {
	let mut best: Option<(usize, u8)> = None;
	let mut index = 0;
	while index < tokens.len() {
		let token = &tokens[index];
		match token.kind {
			TokenKind::Parenthesis(Parenthesis::Right) => {
				return Err(LogicError::UnmatchedClosingParenthesis {
					position: token.position,
				});
			}
			TokenKind::Parenthesis(Parenthesis::Left) => {
				index = find_matching_paren(tokens, index).ok_or(LogicError::UnclosedParenthesis {
					position: token.position,
				})?;
			}
			TokenKind::Connective(connective) => {
				let precedence = connective.precedence();
				if best.map_or(true, |(_, max)| precedence > max) {
					best = Some((index, precedence));
				}
			}
			TokenKind::Variable | TokenKind::Value(_) => {}
		}
		index += 1;
	}
	Ok(best.map(|(index, _)| index))
}
