use super::{token, Cursor, Error, Root, SourcePos, State, TokenKind, Transition};


/// The state for lexing line comments, started by `#` or `//`.
/// The newline is not part of the comment.
#[derive(Debug)]
pub(super) struct LineComment {
	start_offset: usize,
	pos: SourcePos,
	root: Root,
}


impl LineComment {
	pub fn at(cursor: &Cursor, root: Root) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos(), root }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		let end = match cursor.peek() {
			None | Some(b'\n') => true,
			Some(b'\r') => cursor.peek_at(1) == Some(b'\n'),
			// A close tag ends the comment too.
			Some(b'?') => cursor.peek_at(1) == Some(b'>'),
			Some(_) => false,
		};

		if end {
			let text = cursor.lexeme(self.start_offset);
			Transition::resume_produce(self.root, token(TokenKind::Comment, text, self.pos))
		} else {
			Transition::step(self)
		}
	}
}


impl From<LineComment> for State {
	fn from(state: LineComment) -> State {
		State::LineComment(state)
	}
}


/// The state for lexing block comments, including doc comments.
#[derive(Debug)]
pub(super) struct BlockComment {
	start_offset: usize,
	pos: SourcePos,
	root: Root,
}


impl BlockComment {
	pub fn at(cursor: &Cursor, root: Root) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos(), root }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		let offset = cursor.offset();

		match cursor.peek() {
			// The closing star must not be the opening one.
			Some(b'/') if offset >= self.start_offset + 3 && cursor.before(offset) == Some(b'*') => {
				let text = cursor.lexeme_through(self.start_offset);

				// Doc comments start with `/**` followed by whitespace.
				let kind = match text.get(3) {
					Some(c) if text.starts_with(b"/**") && c.is_ascii_whitespace() => TokenKind::DocComment,
					_ => TokenKind::Comment,
				};

				Transition::produce(self.root, token(kind, text, self.pos))
			}

			Some(_) => Transition::step(self),

			None => Transition::error(self.root, Error::unterminated_comment(self.pos)),
		}
	}
}


impl From<BlockComment> for State {
	fn from(state: BlockComment) -> State {
		State::BlockComment(state)
	}
}
