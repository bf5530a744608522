use super::{Anonymous, Scan, State, Transition};
use crate::syntax::{Keyword, Token, TokenKind};


/// Where a name was found, which decides how it is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Position {
	/// A constant, or a function if called.
	Value,
	New,
	/// Trait use in an anonymous class.
	Use,
	InstanceOf,
	Parameter,
	ReturnType,
	Extends,
}


/// After a keyword that must be followed by a class name.
#[derive(Debug)]
pub(super) struct IdentStart {
	position: Position,
	pub(super) resume: Box<State>,
}


impl IdentStart {
	pub fn new(position: Position, resume: State) -> Self {
		Self { position, resume: Box::new(resume) }
	}


	pub fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			kind if kind.is_trivia() => {
				scan.push(&token.text);
				Transition::step(self)
			}

			TokenKind::Identifier | TokenKind::NsSeparator | TokenKind::Keyword(Keyword::Static) => {
				Transition::step(IdentName::new(&token.text, self.position, *self.resume))
			}

			TokenKind::Keyword(Keyword::Namespace) => {
				Transition::step(IdentName::new(scan.resolver.prefix(), self.position, *self.resume))
			}

			TokenKind::Keyword(Keyword::Class) if self.position == Position::New => {
				scan.push(&token.text);
				Transition::step(Anonymous::new(*self.resume))
			}

			// Dynamic names, like `new $class`.
			_ => Transition::resume(*self.resume),
		}
	}
}


impl From<IdentStart> for State {
	fn from(state: IdentStart) -> State {
		State::IdentStart(state)
	}
}


/// How a name is resolved.
#[derive(Debug, Clone, Copy)]
enum Resolution {
	Class,
	Function,
	Constant,
}


/// Accumulating a possibly qualified name. Only the first segment is resolved, the rest is
/// written as is.
#[derive(Debug)]
pub(super) struct IdentName {
	/// The first segment.
	start: String,
	/// The remaining segments, including any whitespace in between.
	name: String,
	position: Position,
	resume: Box<State>,
}


impl IdentName {
	pub fn new<S: Into<State>>(start: &str, position: Position, resume: S) -> Self {
		Self {
			start: start.into(),
			name: String::new(),
			position,
			resume: Box::new(resume.into()),
		}
	}


	pub fn visit(mut self, token: &Token, scan: &mut Scan) -> Transition {
		match token.kind {
			// Comments end the name.
			kind if kind.is_name() || matches!(kind, TokenKind::Whitespace | TokenKind::DocComment) => {
				self.name.push_str(&token.text);
				Transition::step(self)
			}

			// Names with a separator are assumed to be classes, even without `new`.
			TokenKind::Char(b'(') => {
				let resolution = if self.position == Position::New || self.name.contains('\\') {
					Resolution::Class
				} else {
					Resolution::Function
				};

				Transition::resume(self.flush(scan, resolution))
			}

			TokenKind::Variable | TokenKind::DoubleColon => {
				Transition::resume(self.flush(scan, Resolution::Class))
			}

			TokenKind::Char(b',') if self.position == Position::Use => {
				let resume = self.flush(scan, Resolution::Class);
				scan.push(&token.text);
				Transition::step(IdentStart::new(Position::Use, resume))
			}

			_ => {
				let resume = self.flush_eof(scan);
				Transition::resume(resume)
			}
		}
	}


	/// Write the name as if it ended here, returning the state to resume to.
	pub fn flush_eof(self, scan: &mut Scan) -> State {
		let resolution = match self.position {
			Position::Value => Resolution::Constant,
			_ => Resolution::Class,
		};

		self.flush(scan, resolution)
	}


	fn flush(self, scan: &mut Scan, resolution: Resolution) -> State {
		let start = match resolution {
			Resolution::Class => scan.class_name(&self.start),
			Resolution::Function => scan.resolver.function_name(&self.start),
			Resolution::Constant => scan.resolver.constant_name(&self.start),
		};

		scan.push(&start);
		scan.push(&self.name);

		*self.resume
	}
}


impl From<IdentName> for State {
	fn from(state: IdentName) -> State {
		State::IdentName(state)
	}
}
