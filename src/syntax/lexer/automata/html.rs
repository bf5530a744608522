use super::{token, Cursor, Root, SourcePos, Span, State, TokenKind, Transition};


/// The state for text outside of php tags.
#[derive(Debug, Default)]
pub(super) struct Html {
	/// Where the current run of inline html started. Set when the first character is
	/// visited.
	start: Option<(usize, SourcePos)>,
}


impl Html {
	pub fn new() -> Self {
		Self::default()
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let (start_offset, pos) = *self.start.get_or_insert((cursor.offset(), cursor.pos()));
		let pending = cursor.offset() > start_offset;

		match open_tag(cursor.rest()) {
			// Produce the html before the tag, and then visit the tag again.
			Some(_) if pending => {
				let text = cursor.lexeme(start_offset);
				Transition::resume_produce(Html::new(), token(TokenKind::InlineHtml, text, pos))
			}

			Some((length, kind)) => Transition::resume(Span::new(cursor, length, kind, Root::default())),

			None if cursor.is_eof() && pending => {
				let text = cursor.lexeme(start_offset);
				Transition::resume_produce(Html::new(), token(TokenKind::InlineHtml, text, pos))
			}

			None => Transition::step(self),
		}
	}
}


impl From<Html> for State {
	fn from(state: Html) -> State {
		State::Html(state)
	}
}


/// Check if the input starts with an open tag, returning it's length and kind.
/// The long open tag includes a single whitespace character after it.
fn open_tag(input: &[u8]) -> Option<(usize, TokenKind)> {
	if input.starts_with(b"<?=") {
		return Some((3, TokenKind::OpenTagWithEcho));
	}

	let tag = input.get(.. 5)?;
	if !tag.eq_ignore_ascii_case(b"<?php") {
		return None;
	}

	match input.get(5 ..) {
		Some(rest) if rest.starts_with(b"\r\n") => Some((7, TokenKind::OpenTag)),
		Some([c, ..]) if c.is_ascii_whitespace() => Some((6, TokenKind::OpenTag)),
		Some([]) | None => Some((5, TokenKind::OpenTag)),
		Some(_) => None,
	}
}


/// Check if the input starts with a close tag, returning it's length.
/// The close tag includes a single newline after it.
pub(super) fn close_tag(input: &[u8]) -> Option<usize> {
	if !input.starts_with(b"?>") {
		return None;
	}

	let newline = if input[2 ..].starts_with(b"\r\n") {
		2
	} else if input[2 ..].starts_with(b"\n") {
		1
	} else {
		0
	};

	Some(2 + newline)
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_open_tag() {
		assert_eq!(open_tag(b"<?php\n$x"), Some((6, TokenKind::OpenTag)));
		assert_eq!(open_tag(b"<?PHP\r\n"), Some((7, TokenKind::OpenTag)));
		assert_eq!(open_tag(b"<?php"), Some((5, TokenKind::OpenTag)));
		assert_eq!(open_tag(b"<?= $x ?>"), Some((3, TokenKind::OpenTagWithEcho)));
		assert_eq!(open_tag(b"<?phpx"), None);
		assert_eq!(open_tag(b"<html>"), None);
	}


	#[test]
	fn test_close_tag() {
		assert_eq!(close_tag(b"?>\nfoo"), Some(3));
		assert_eq!(close_tag(b"?>foo"), Some(2));
		assert_eq!(close_tag(b"?->foo"), None);
	}
}
