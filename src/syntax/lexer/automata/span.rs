use super::{token, Cursor, SourcePos, State, TokenKind, Transition};


/// The state for lexing tokens whose length is known in advance, like operators and
/// php tags. Once the token is consumed, the automata resumes in the given state.
#[derive(Debug)]
pub(super) struct Span {
	kind: TokenKind,
	start_offset: usize,
	end_offset: usize,
	pos: SourcePos,
	next: Box<State>,
}


impl Span {
	pub fn new<S: Into<State>>(cursor: &Cursor, length: usize, kind: TokenKind, next: S) -> Self {
		Self {
			kind,
			start_offset: cursor.offset(),
			end_offset: cursor.offset() + length,
			pos: cursor.pos(),
			next: Box::new(next.into()),
		}
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		if cursor.offset() < self.end_offset && !cursor.is_eof() {
			Transition::step(self)
		} else {
			let text = cursor.lexeme(self.start_offset);
			let token = token(self.kind, text, self.pos);

			Transition::resume_produce(*self.next, token)
		}
	}
}


impl From<Span> for State {
	fn from(state: Span) -> State {
		State::Span(state)
	}
}
