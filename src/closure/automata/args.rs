use super::{
	body::expression,
	ident::{IdentName, Position},
	Body,
	Scan,
	State,
	Transition,
};
use crate::syntax::{Keyword, Token, TokenKind};


/// The parameter list of a closure, and what comes after it until the use clause, the
/// return type or the body.
#[derive(Debug)]
pub(super) struct Args {
	/// Whether this is a closure nested in the body of the reconstructed one.
	nested: bool,
	/// Bracket depth. The parameters are at depth one.
	depth: u32,
	/// Whether inside a parameter default value.
	default: bool,
}


impl Args {
	pub fn outer() -> Self {
		Self { nested: false, depth: 0, default: false }
	}


	pub fn nested() -> Self {
		Self { nested: true, depth: 0, default: false }
	}


	pub fn visit(mut self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			TokenKind::Char(b'(') | TokenKind::Char(b'[') | TokenKind::Attribute => {
				scan.push(&token.text);
				self.depth += 1;
				Transition::step(self)
			}

			TokenKind::Char(b')') | TokenKind::Char(b']') => {
				scan.push(&token.text);
				self.depth = self.depth.saturating_sub(1);
				self.default &= self.depth > 0;
				Transition::step(self)
			}

			TokenKind::Char(b',') if self.depth == 1 => {
				scan.push(&token.text);
				self.default = false;
				Transition::step(self)
			}

			TokenKind::Char(b'=') if self.depth == 1 && !self.default => {
				scan.push(&token.text);
				self.default = true;
				Transition::step(self)
			}

			_ if self.default => expression(token, scan, self.into()),

			// Parameter types.
			TokenKind::Identifier | TokenKind::NsSeparator if self.depth > 0 => {
				Transition::step(IdentName::new(&token.text, Position::Parameter, self))
			}

			TokenKind::Variable => {
				if !self.nested {
					scan.params.insert(token.text.trim_start_matches('$').into());
				}

				scan.push(&token.text);
				Transition::step(self)
			}

			TokenKind::Keyword(Keyword::Use) if self.depth == 0 => {
				scan.push(&token.text);
				Transition::step(UseClause { nested: self.nested })
			}

			TokenKind::Char(b':') if self.depth == 0 => {
				scan.push(&token.text);
				Transition::step(ReturnType { nested: self.nested })
			}

			TokenKind::DoubleArrow if self.depth == 0 && !self.nested && scan.short => {
				scan.push(&token.text);
				Transition::step(Body)
			}

			TokenKind::Char(b'{') if self.depth == 0 => open_body(token, scan),

			_ => {
				scan.push(&token.text);
				Transition::step(self)
			}
		}
	}
}


impl From<Args> for State {
	fn from(state: Args) -> State {
		State::Args(state)
	}
}


/// The `use (...)` clause of a closure.
#[derive(Debug)]
pub(super) struct UseClause {
	nested: bool,
}


impl UseClause {
	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			// Captures of nested closures are plain variables of the reconstructed one.
			TokenKind::Variable => {
				if self.nested {
					scan.variable(&token.text);
				} else {
					scan.uses.push(token.text.trim_start_matches('$').into());
				}

				scan.push(&token.text);
				Transition::step(self)
			}

			TokenKind::Char(b':') => {
				scan.push(&token.text);
				Transition::step(ReturnType { nested: self.nested })
			}

			TokenKind::Char(b'{') => open_body(token, scan),

			_ => {
				scan.push(&token.text);
				Transition::step(self)
			}
		}
	}
}


impl From<UseClause> for State {
	fn from(state: UseClause) -> State {
		State::UseClause(state)
	}
}


/// The return type of a closure.
#[derive(Debug)]
pub(super) struct ReturnType {
	nested: bool,
}


impl ReturnType {
	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			TokenKind::Identifier | TokenKind::NsSeparator => {
				Transition::step(IdentName::new(&token.text, Position::ReturnType, self))
			}

			TokenKind::Keyword(Keyword::Static) => {
				scan.use_scope();
				scan.push(&token.text);
				Transition::step(self)
			}

			TokenKind::DoubleArrow if !self.nested && scan.short => {
				scan.push(&token.text);
				Transition::step(Body)
			}

			TokenKind::Char(b'{') => open_body(token, scan),

			_ => {
				scan.push(&token.text);
				Transition::step(self)
			}
		}
	}
}


impl From<ReturnType> for State {
	fn from(state: ReturnType) -> State {
		State::ReturnType(state)
	}
}


/// Open the body of a closure with braces. Nested bodies share the depth of the outer one.
fn open_body(token: &Token, scan: &mut Scan) -> Transition {
	scan.push(&token.text);
	scan.depth += 1;
	Transition::step(Body)
}
