use super::{
	ident::{IdentName, IdentStart, Position},
	Args,
	Scan,
	State,
	Transition,
};
use crate::syntax::{Keyword, Token, TokenKind};


/// The body of the closure. For arrow functions, the body is a single expression that ends
/// at the first top level `,`, `;` or closing bracket.
#[derive(Debug)]
pub(super) struct Body;


impl Body {
	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			kind if kind.is_open_brace() => {
				scan.push(&token.text);
				scan.depth += 1;
				Transition::step(self)
			}

			TokenKind::Char(b'}') if scan.depth == 0 => Transition::finish(),

			TokenKind::Char(b'}') => {
				scan.push(&token.text);
				scan.depth -= 1;

				if scan.depth == 0 && !scan.short {
					return Transition::finish();
				}

				if scan.anonymous == Some(scan.depth) {
					scan.anonymous = None;
				}

				Transition::step(self)
			}

			TokenKind::Char(b'(') | TokenKind::Char(b'[') | TokenKind::Attribute => {
				scan.push(&token.text);
				if scan.short {
					scan.depth += 1;
				}
				Transition::step(self)
			}

			TokenKind::Char(b')') | TokenKind::Char(b']') if scan.short && scan.depth == 0 => {
				Transition::finish()
			}

			TokenKind::Char(b')') | TokenKind::Char(b']') => {
				if scan.short {
					scan.depth -= 1;
				}
				scan.push(&token.text);
				Transition::step(self)
			}

			TokenKind::Char(b',') | TokenKind::Char(b';') if scan.short && scan.depth == 0 => {
				Transition::finish()
			}

			TokenKind::Keyword(Keyword::Function) => {
				scan.push(&token.text);
				Transition::step(Args::nested())
			}

			_ => expression(token, scan, self.into()),
		}
	}
}


impl From<Body> for State {
	fn from(state: Body) -> State {
		State::Body(state)
	}
}


/// Visit a token of an expression, resuming to the given state when the token is done
/// with.
pub(super) fn expression(token: &Token, scan: &mut Scan, resume: State) -> Transition {
	match token.kind {
		TokenKind::Magic(constant) => {
			let value = scan.magic.substitute(constant, token.line);
			scan.push(&value);
			Transition::step(resume)
		}

		TokenKind::Comment => {
			match scan.magic.track(&token.text) {
				Some(block) => scan.push(&block),
				None => scan.push(&token.text),
			}
			Transition::step(resume)
		}

		TokenKind::Variable => {
			scan.variable(&token.text);
			scan.push(&token.text);
			Transition::step(resume)
		}

		TokenKind::Keyword(Keyword::Static) => {
			scan.use_scope();
			scan.push(&token.text);
			Transition::step(resume)
		}

		TokenKind::Identifier | TokenKind::NsSeparator => {
			Transition::step(IdentName::new(&token.text, Position::Value, resume))
		}

		// A `namespace\name` relative name.
		TokenKind::Keyword(Keyword::Namespace) => {
			Transition::step(IdentName::new(scan.resolver.prefix(), Position::Value, resume))
		}

		TokenKind::Keyword(Keyword::New) => ident_start(token, scan, Position::New, resume),
		TokenKind::Keyword(Keyword::InstanceOf) => ident_start(token, scan, Position::InstanceOf, resume),
		TokenKind::Keyword(Keyword::Use) => ident_start(token, scan, Position::Use, resume),

		kind if kind.is_member_access() => {
			scan.push(&token.text);
			Transition::step(
				IgnoreNext {
					resume: Box::new(resume),
					scope: kind == TokenKind::DoubleColon,
				}
			)
		}

		_ => {
			scan.push(&token.text);
			Transition::step(resume)
		}
	}
}


fn ident_start(token: &Token, scan: &mut Scan, position: Position, resume: State) -> Transition {
	scan.push(&token.text);
	Transition::step(IdentStart::new(position, resume))
}


/// After a member access operator. The member name is never resolved.
#[derive(Debug)]
pub(super) struct IgnoreNext {
	pub(super) resume: Box<State>,
	/// Whether after `::`, where variables are static properties.
	scope: bool,
}


impl IgnoreNext {
	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			kind if kind.is_trivia() => {
				scan.push(&token.text);
				Transition::step(self)
			}

			// A dynamic member name, which is a variable of the closure.
			TokenKind::Variable if !self.scope => Transition::resume(*self.resume),

			TokenKind::Identifier
			| TokenKind::Variable
			| TokenKind::Keyword(_)
			| TokenKind::Magic(_) => {
				scan.push(&token.text);
				Transition::step(*self.resume)
			}

			_ => Transition::resume(*self.resume),
		}
	}
}


impl From<IgnoreNext> for State {
	fn from(state: IgnoreNext) -> State {
		State::IgnoreNext(state)
	}
}


/// The header of an anonymous class, after `new class`.
#[derive(Debug)]
pub(super) struct Anonymous {
	/// Parenthesis depth of the constructor arguments.
	args_depth: u32,
	resume: Box<State>,
}


impl Anonymous {
	pub fn new(resume: State) -> Self {
		Self { args_depth: 0, resume: Box::new(resume) }
	}


	pub fn visit(mut self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			TokenKind::Char(b'(') => {
				scan.push(&token.text);
				self.args_depth += 1;
				Transition::step(self)
			}

			TokenKind::Char(b')') if self.args_depth > 0 => {
				scan.push(&token.text);
				self.args_depth -= 1;
				Transition::step(self)
			}

			// The constructor arguments belong to the closure.
			_ if self.args_depth > 0 => expression(token, scan, self.into()),

			TokenKind::Char(b'{') => {
				if scan.anonymous.is_none() {
					scan.anonymous = Some(scan.depth);
				}
				Transition::resume(*self.resume)
			}

			// Parent class and interfaces.
			TokenKind::Identifier | TokenKind::NsSeparator => {
				Transition::step(IdentName::new(&token.text, Position::Extends, self))
			}

			_ => {
				scan.push(&token.text);
				Transition::step(self)
			}
		}
	}
}


impl From<Anonymous> for State {
	fn from(state: Anonymous) -> State {
		State::Anonymous(state)
	}
}
