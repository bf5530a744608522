use super::{Args, Scan, State, Transition};
use crate::syntax::{Keyword, Token, TokenKind};


/// Looking for the start of the closure expression. Anything before it in the range is
/// skipped.
#[derive(Debug)]
pub(super) struct Start;


impl Start {
	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			TokenKind::Keyword(Keyword::Function) => {
				scan.push(&token.text);
				Transition::step(Function)
			}

			TokenKind::Keyword(Keyword::Static) => {
				scan.push(&token.text);
				Transition::step(Static)
			}

			TokenKind::Keyword(Keyword::Fn) => arrow(token, scan),

			_ => Transition::step(self),
		}
	}
}


impl From<Start> for State {
	fn from(state: Start) -> State {
		State::Start(state)
	}
}


/// After `static`, which may precede a closure or be something else entirely, like
/// `static::method()`.
#[derive(Debug)]
pub(super) struct Static;


impl Static {
	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment => {
				scan.push(&token.text);
				Transition::step(self)
			}

			TokenKind::Keyword(Keyword::Function) => {
				scan.push(&token.text);
				Transition::step(Function)
			}

			TokenKind::Keyword(Keyword::Fn) => arrow(token, scan),

			_ => {
				scan.code.clear();
				Transition::resume(Start)
			}
		}
	}
}


impl From<Static> for State {
	fn from(state: Static) -> State {
		State::Static(state)
	}
}


/// After `function`, before the parameters.
#[derive(Debug)]
pub(super) struct Function;


impl Function {
	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			// A named function declaration is not a closure.
			TokenKind::Identifier => {
				scan.code.clear();
				Transition::step(Named)
			}

			TokenKind::Char(b'(') => Transition::resume(Args::outer()),

			_ => {
				scan.push(&token.text);
				Transition::step(self)
			}
		}
	}
}


impl From<Function> for State {
	fn from(state: Function) -> State {
		State::Function(state)
	}
}


/// Inside a named function declaration, looking for a closure.
#[derive(Debug)]
pub(super) struct Named;


impl Named {
	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			TokenKind::Keyword(Keyword::Function) | TokenKind::Keyword(Keyword::Static) => {
				Transition::resume(Start)
			}

			TokenKind::Keyword(Keyword::Fn) => arrow(token, scan),

			_ => Transition::step(self),
		}
	}
}


impl From<Named> for State {
	fn from(state: Named) -> State {
		State::Named(state)
	}
}


/// Start an arrow function at the `fn` keyword.
fn arrow(token: &Token, scan: &mut Scan) -> Transition {
	scan.short = true;
	scan.push(&token.text);
	Transition::step(Args::outer())
}
