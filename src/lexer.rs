use crate::error::LogicError;
use crate::token::{Connective, Parenthesis, Token, TokenKind, Value};
use log::trace;
use plex::lexer;

/// Output of the tokenizer: the tokens read so far, the character offset
/// right after the last consumed character and the variable names in
/// first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadResult {
	pub position: usize,
	pub tokens: Vec<Token>,
	pub free_variables: Vec<String>,
}

impl ReadResult {
	/// Symbols joined by single spaces. Reading this text again yields the
	/// same kinds and symbols (positions aside).
	pub fn source_text(&self) -> String {
		self.tokens
			.iter()
			.map(|token| token.symbol.as_str())
			.collect::<Vec<_>>()
			.join(" ")
	}
}

enum Lexeme {
	Token(TokenKind),
	Whitespace,
	Unexpected,
}

lexer! {
	fn next_lexeme(text: 'a) -> Lexeme;

	r#"[a-z]+"# => Lexeme::Token(TokenKind::Variable),
	r#"\&"# => Lexeme::Token(TokenKind::Connective(Connective::Conjunction)),
	r#"\|"# => Lexeme::Token(TokenKind::Connective(Connective::Disjunction)),
	r#">"# => Lexeme::Token(TokenKind::Connective(Connective::Implication)),
	r#"="# => Lexeme::Token(TokenKind::Connective(Connective::Equivalence)),
	r#"!"# => Lexeme::Token(TokenKind::Connective(Connective::Complement)),
	r#"\("# => Lexeme::Token(TokenKind::Parenthesis(Parenthesis::Left)),
	r#"\)"# => Lexeme::Token(TokenKind::Parenthesis(Parenthesis::Right)),
	r#"T"# => Lexeme::Token(TokenKind::Value(Value::Tautology)),
	r#"C"# => Lexeme::Token(TokenKind::Value(Value::Contradiction)),
	r#"\s+"# => Lexeme::Whitespace,
	r#"."# => Lexeme::Unexpected,
}

/// Tokenizes a whole expression.
pub fn read(source: &str) -> Result<ReadResult, LogicError> {
	read_from(source, ReadResult::default())
}

/// Keeps tokenizing `source` on top of an earlier result. Positions continue
/// from `start.position` and variables already known are not repeated.
pub fn read_from(source: &str, start: ReadResult) -> Result<ReadResult, LogicError> {
	let mut result = start;
	let mut remaining = source;
	while !remaining.is_empty() {
		let position = result.position;
		let (lexeme, new_remaining) = match next_lexeme(remaining) {
			Some(found) => found,
			None => return Err(unexpected(remaining, position)),
		};
		let width = remaining.len() - new_remaining.len();
		let text = &remaining[..width];
		match lexeme {
			Lexeme::Whitespace => {}
			Lexeme::Unexpected => return Err(unexpected(remaining, position)),
			Lexeme::Token(kind) => {
				trace!("read {:?} {:?} at {}", kind, text, position);
				if kind == TokenKind::Variable && !result.free_variables.iter().any(|name| name == text) {
					result.free_variables.push(text.to_owned());
				}
				result.tokens.push(Token::new(kind, text, position));
			}
		}
		result.position += text.chars().count();
		remaining = new_remaining;
	}
	Ok(result)
}

// reports the character at the failing offset itself
fn unexpected(remaining: &str, position: usize) -> LogicError {
	LogicError::UnexpectedCharacter {
		character: remaining.chars().next().unwrap_or_default(),
		position,
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use test_log::test;

	#[test]
	fn test_all_symbols() {
		let result = read("!>=|&vTC()").unwrap();
		let names: Vec<&str> = result.tokens.iter().map(|token| token.name()).collect();
		assert_eq!(
			names,
			vec![
				"complement",
				"implication",
				"equivalence",
				"disjunction",
				"conjunction",
				"v",
				"tautology",
				"contradiction",
				"left-paren",
				"right-paren",
			]
		);
		for (index, token) in result.tokens.iter().enumerate() {
			assert_eq!(token.position, index);
		}
		assert_eq!(result.tokens[5].kind, TokenKind::Variable);
		assert_eq!(result.tokens[6].kind, TokenKind::Value(Value::Tautology));
		assert_eq!(result.position, 10);
		assert_eq!(result.free_variables, vec!["v"]);
	}

	#[test]
	fn test_variables_in_first_seen_order() {
		let result = read("beta & alpha | beta > gamma").unwrap();
		assert_eq!(result.free_variables, vec!["beta", "alpha", "gamma"]);
		assert_eq!(result.tokens[0].symbol, "beta");
		assert_eq!(result.tokens[2].position, 7);
	}

	#[test]
	fn test_whitespace_is_skipped() {
		let result = read("  a \t&\n b  ").unwrap();
		assert_eq!(result.tokens.len(), 3);
		assert_eq!(result.tokens[0].position, 2);
		assert_eq!(result.tokens[1].position, 5);
		assert_eq!(result.tokens[2].position, 8);
		assert_eq!(result.position, 11);
	}

	#[test]
	fn test_unicode_whitespace() {
		let result = read("a\x0Cb").unwrap();
		assert_eq!(result.tokens.len(), 2);
		assert_eq!(result.tokens[1].position, 2);

		let result = read("a\x0B& b").unwrap();
		assert_eq!(result.tokens.len(), 3);

		// positions count characters, not bytes
		let result = read("a\u{a0}& b").unwrap();
		let positions: Vec<usize> = result.tokens.iter().map(|token| token.position).collect();
		assert_eq!(positions, vec![0, 2, 4]);
		assert_eq!(result.position, 5);
		assert_eq!(
			read("a\u{2003}% b"),
			Err(LogicError::UnexpectedCharacter {
				character: '%',
				position: 2
			})
		);
	}

	#[test]
	fn test_unexpected_character() {
		assert_eq!(
			read("22 | otra"),
			Err(LogicError::UnexpectedCharacter {
				character: '2',
				position: 0
			})
		);
		assert_eq!(
			read("a & B"),
			Err(LogicError::UnexpectedCharacter {
				character: 'B',
				position: 4
			})
		);
	}

	#[test]
	fn test_read_from_continues() {
		let first = read("a & b").unwrap();
		let result = read_from(" | a & c", first).unwrap();
		assert_eq!(result.free_variables, vec!["a", "b", "c"]);
		assert_eq!(result.tokens.len(), 7);
		assert_eq!(result.tokens[3].position, 6);
		assert_eq!(result.position, 13);
	}

	#[test]
	fn test_source_text_reads_back() {
		let result = read("(ab&!c)=T").unwrap();
		let again = read(&result.source_text()).unwrap();
		let shape = |r: &ReadResult| -> Vec<(TokenKind, String)> {
			r.tokens.iter().map(|t| (t.kind, t.symbol.clone())).collect()
		};
		assert_eq!(shape(&result), shape(&again));
		assert_eq!(result.free_variables, again.free_variables);
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(read("").unwrap(), ReadResult::default());
		assert!(read("   ").unwrap().tokens.is_empty());
	}
}
