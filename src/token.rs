use std::fmt;

/// Logical operators, ordered by how loosely they bind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
	Complement,
	Conjunction,
	Disjunction,
	Implication,
	Equivalence,
}

impl Connective {
	pub fn from_symbol(ch: char) -> Option<Connective> {
		match ch {
			'!' => Some(Connective::Complement),
			'&' => Some(Connective::Conjunction),
			'|' => Some(Connective::Disjunction),
			'>' => Some(Connective::Implication),
			'=' => Some(Connective::Equivalence),
			_ => None,
		}
	}

	pub fn symbol(self) -> char {
		match self {
			Connective::Complement => '!',
			Connective::Conjunction => '&',
			Connective::Disjunction => '|',
			Connective::Implication => '>',
			Connective::Equivalence => '=',
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Connective::Complement => "complement",
			Connective::Conjunction => "conjunction",
			Connective::Disjunction => "disjunction",
			Connective::Implication => "implication",
			Connective::Equivalence => "equivalence",
		}
	}

	/// Higher numbers bind looser and become the root of a split first.
	pub fn precedence(self) -> u8 {
		match self {
			Connective::Complement => 0,
			Connective::Disjunction => 1,
			Connective::Conjunction => 2,
			Connective::Implication => 3,
			Connective::Equivalence => 4,
		}
	}

	pub fn is_unary(self) -> bool {
		self == Connective::Complement
	}

	/// Applies a binary connective, `a` being the left operand.
	/// Complement ignores `a` and negates `b`.
	pub fn apply(self, a: bool, b: bool) -> bool {
		match self {
			Connective::Complement => !b,
			Connective::Conjunction => a && b,
			Connective::Disjunction => a || b,
			Connective::Implication => !a || b,
			Connective::Equivalence => a == b,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Value {
	Tautology,
	Contradiction,
}

impl Value {
	pub fn name(self) -> &'static str {
		match self {
			Value::Tautology => "tautology",
			Value::Contradiction => "contradiction",
		}
	}

	pub fn truth(self) -> bool {
		self == Value::Tautology
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parenthesis {
	Left,
	Right,
}

impl Parenthesis {
	pub fn name(self) -> &'static str {
		match self {
			Parenthesis::Left => "left-paren",
			Parenthesis::Right => "right-paren",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Variable,
	Value(Value),
	Connective(Connective),
	Parenthesis(Parenthesis),
}

/// A lexeme of the source text. `position` is the character offset of its
/// first character and only matters for error reporting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
	pub kind: TokenKind,
	pub symbol: String,
	pub position: usize,
}

impl Token {
	pub fn new(kind: TokenKind, symbol: &str, position: usize) -> Token {
		Token {
			kind,
			symbol: symbol.to_owned(),
			position,
		}
	}

	/// Canonical name: the variable name itself, or the fixed name of the
	/// symbol (`&` is "conjunction", `T` is "tautology", ...).
	pub fn name(&self) -> &str {
		match self.kind {
			TokenKind::Variable => &self.symbol,
			TokenKind::Value(value) => value.name(),
			TokenKind::Connective(connective) => connective.name(),
			TokenKind::Parenthesis(paren) => paren.name(),
		}
	}

	pub fn connective(&self) -> Option<Connective> {
		match self.kind {
			TokenKind::Connective(connective) => Some(connective),
			_ => None,
		}
	}

	pub fn is_paren(&self, paren: Parenthesis) -> bool {
		self.kind == TokenKind::Parenthesis(paren)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.symbol)
	}
}
