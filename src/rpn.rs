use crate::error::LogicError;
use crate::lexer::ReadResult;
use crate::tree::Node;
use log::debug;

/// Rewrites the tokens of `read` in reverse polish order. Parentheses are
/// gone afterwards; position and free variables are kept as read.
pub fn to_rpn(read: ReadResult) -> Result<ReadResult, LogicError> {
	let tree = Node::build(&read.tokens)?;
	let tokens = match tree {
		Some(root) => {
			debug!("tree: {}", root);
			root.flatten()
		}
		None => Vec::new(),
	};
	Ok(ReadResult { tokens, ..read })
}
