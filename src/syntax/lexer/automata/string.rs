use super::{
	token,
	word::IsWord,
	Cursor,
	Error,
	Root,
	SourcePos,
	Span,
	State,
	TokenKind,
	Transition,
};


/// The state for lexing quoted strings without interpolation.
#[derive(Debug)]
pub(super) struct Quoted {
	quote: u8,
	start_offset: usize,
	pos: SourcePos,
	escaping: bool,
	root: Root,
}


impl Quoted {
	pub fn at(cursor: &Cursor, root: Root) -> Self {
		Self {
			quote: cursor.peek().unwrap_or(b'\''),
			start_offset: cursor.offset(),
			pos: cursor.pos(),
			escaping: false,
			root,
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// The opening quote.
			Some(_) if cursor.offset() == self.start_offset => Transition::step(self),

			Some(_) if self.escaping => {
				self.escaping = false;
				Transition::step(self)
			}

			Some(b'\\') => {
				self.escaping = true;
				Transition::step(self)
			}

			Some(c) if c == self.quote => {
				let text = cursor.lexeme_through(self.start_offset);
				Transition::produce(self.root, token(TokenKind::ConstantString, text, self.pos))
			}

			Some(_) => Transition::step(self),

			None => Transition::error(self.root, Error::unterminated_string(self.pos)),
		}
	}
}


impl From<Quoted> for State {
	fn from(state: Quoted) -> State {
		State::Quoted(state)
	}
}


/// How an interpolated string is terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Delimiter {
	Quote,
	Backtick,
	Heredoc {
		label: Box<[u8]>,
		/// Nowdocs have no escape sequences nor interpolation.
		nowdoc: bool,
	},
}


/// The state for the literal parts of an interpolated string.
#[derive(Debug)]
pub(super) struct Encapsed {
	delimiter: Delimiter,
	/// Where the current literal part started. Set when the first character is visited.
	start: Option<(usize, SourcePos)>,
	escaping: bool,
	/// Whether the cursor is at the start of a line, where a heredoc may end.
	line_start: bool,
	/// The position of the opening delimiter.
	pos: SourcePos,
	root: Root,
}


impl Encapsed {
	pub fn new(delimiter: Delimiter, root: Root, pos: SourcePos) -> Self {
		// The heredoc start token includes the newline.
		let line_start = matches!(delimiter, Delimiter::Heredoc { .. });

		Self {
			delimiter,
			start: None,
			escaping: false,
			line_start,
			pos,
			root,
		}
	}


	/// Start a new literal part from the next visited character.
	pub fn restart(mut self) -> Self {
		self.start = None;
		self
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let (start_offset, pos) = *self.start.get_or_insert((cursor.offset(), cursor.pos()));
		let pending = cursor.offset() > start_offset;

		if self.escaping {
			self.escaping = false;
			self.line_start = cursor.peek() == Some(b'\n');
			return Transition::step(self);
		}

		let heredoc_end = match &self.delimiter {
			Delimiter::Heredoc { label, .. } if self.line_start => heredoc_end(cursor.rest(), label),
			_ => None,
		};

		if let Some(length) = heredoc_end {
			return if pending {
				self.flush(cursor, start_offset, pos)
			} else {
				Transition::resume(Span::new(cursor, length, TokenKind::EndHeredoc, self.root))
			};
		}

		let nowdoc = matches!(self.delimiter, Delimiter::Heredoc { nowdoc: true, .. });
		let next = cursor.peek_at(1);

		match cursor.peek() {
			None => {
				let error = match &self.delimiter {
					Delimiter::Heredoc { label, .. } => Error::unterminated_heredoc(label, self.pos),
					_ => Error::unterminated_string(self.pos),
				};

				Transition::error(self.root, error)
			}

			Some(b'\n') => {
				self.line_start = true;
				Transition::step(self)
			}

			Some(_) if nowdoc => {
				self.line_start = false;
				Transition::step(self)
			}

			Some(b'\\') => {
				self.escaping = true;
				self.line_start = false;
				Transition::step(self)
			}

			Some(c @ b'"') | Some(c @ b'`') if self.closes_with(c) => {
				if pending {
					self.flush(cursor, start_offset, pos)
				} else {
					Transition::resume(Span::new(cursor, 1, TokenKind::Char(c), self.root))
				}
			}

			// Simple interpolation: "$name".
			Some(b'$') if next.map_or(false, |c| c.is_word_start()) => {
				if pending {
					self.flush(cursor, start_offset, pos)
				} else {
					Transition::resume(EncapsedVariable::at(cursor, self.restart()))
				}
			}

			// Complex interpolation: "{$expression}".
			Some(b'{') if next == Some(b'$') => {
				if pending {
					self.flush(cursor, start_offset, pos)
				} else {
					let pos = cursor.pos();
					let root = Root::embedded(self, false, pos);
					Transition::resume(Span::new(cursor, 1, TokenKind::CurlyOpen, root))
				}
			}

			// Dollar brace interpolation: "${name}" or "${expression}".
			Some(b'$') if next == Some(b'{') => {
				if pending {
					self.flush(cursor, start_offset, pos)
				} else {
					let pos = cursor.pos();
					let root = Root::embedded(self, true, pos);
					Transition::resume(Span::new(cursor, 2, TokenKind::DollarOpenCurly, root))
				}
			}

			Some(_) => {
				self.line_start = false;
				Transition::step(self)
			}
		}
	}


	/// Produce the literal part read so far, and then visit the current character again.
	fn flush(self, cursor: &Cursor, start_offset: usize, pos: SourcePos) -> Transition {
		let text = cursor.lexeme(start_offset);
		let token = token(TokenKind::EncapsedString, text, pos);

		Transition::resume_produce(self.restart(), token)
	}


	fn closes_with(&self, c: u8) -> bool {
		match self.delimiter {
			Delimiter::Quote => c == b'"',
			Delimiter::Backtick => c == b'`',
			Delimiter::Heredoc { .. } => false,
		}
	}
}


impl From<Encapsed> for State {
	fn from(state: Encapsed) -> State {
		State::Encapsed(state)
	}
}


/// The state for simple variable interpolation in strings: `$name`, optionally followed by
/// a property access or an offset.
#[derive(Debug)]
pub(super) struct EncapsedVariable {
	start_offset: usize,
	pos: SourcePos,
	string: Encapsed,
}


impl EncapsedVariable {
	pub fn at(cursor: &Cursor, string: Encapsed) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos(), string }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// The dollar sign.
			Some(_) if cursor.offset() == self.start_offset => Transition::step(self),

			Some(c) if c.is_word() => Transition::step(self),

			_ => {
				let text = cursor.lexeme(self.start_offset);
				let token = token(TokenKind::Variable, text, self.pos);

				let rest = cursor.rest();
				let word_at = |ix: usize| rest.get(ix).map_or(false, |c| c.is_word_start());

				let next: State = if rest.starts_with(b"->") && word_at(2) {
					let property = EncapsedProperty::new(self.string);
					Span::new(cursor, 2, TokenKind::ObjectOperator, property).into()
				} else if rest.starts_with(b"?->") && word_at(3) {
					let property = EncapsedProperty::new(self.string);
					Span::new(cursor, 3, TokenKind::NullsafeObjectOperator, property).into()
				} else if rest.starts_with(b"[") {
					let offset = EncapsedOffset::new(self.string);
					Span::new(cursor, 1, TokenKind::Char(b'['), offset).into()
				} else {
					self.string.into()
				};

				Transition::resume_produce(next, token)
			}
		}
	}
}


impl From<EncapsedVariable> for State {
	fn from(state: EncapsedVariable) -> State {
		State::EncapsedVariable(state)
	}
}


/// The property name in `"$name->property"`.
#[derive(Debug)]
pub(super) struct EncapsedProperty {
	start: Option<(usize, SourcePos)>,
	string: Encapsed,
}


impl EncapsedProperty {
	pub fn new(string: Encapsed) -> Self {
		Self { start: None, string }
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let (start_offset, pos) = *self.start.get_or_insert((cursor.offset(), cursor.pos()));

		match cursor.peek() {
			Some(c) if c.is_word() => Transition::step(self),

			_ => {
				let text = cursor.lexeme(start_offset);
				Transition::resume_produce(self.string, token(TokenKind::Identifier, text, pos))
			}
		}
	}
}


impl From<EncapsedProperty> for State {
	fn from(state: EncapsedProperty) -> State {
		State::EncapsedProperty(state)
	}
}


/// The offset in `"$name[offset]"`. The offset is either a variable, or a literal key.
/// Literal keys are never constant names, so they are produced as string parts.
#[derive(Debug)]
pub(super) struct EncapsedOffset {
	start: Option<(usize, SourcePos)>,
	string: Encapsed,
}


impl EncapsedOffset {
	pub fn new(string: Encapsed) -> Self {
		Self { start: None, string }
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let (start_offset, pos) = *self.start.get_or_insert((cursor.offset(), cursor.pos()));
		let pending = cursor.offset() > start_offset;

		let key = |cursor: &Cursor| {
			let text = cursor.lexeme(start_offset);
			let kind = if text.starts_with(b"$") {
				TokenKind::Variable
			} else {
				TokenKind::EncapsedString
			};

			token(kind, text, pos)
		};

		match cursor.peek() {
			Some(b']') if pending => {
				let close = Span::new(cursor, 1, TokenKind::Char(b']'), self.string);
				Transition::resume_produce(close, key(cursor))
			}

			Some(b']') => Transition::resume(Span::new(cursor, 1, TokenKind::Char(b']'), self.string)),

			Some(c) if c.is_word() || c == b'$' || c == b'-' => Transition::step(self),

			// Malformed offset. Let the string deal with the current character.
			_ if pending => Transition::resume_produce(self.string, key(cursor)),

			_ => Transition::resume(self.string),
		}
	}
}


impl From<EncapsedOffset> for State {
	fn from(state: EncapsedOffset) -> State {
		State::EncapsedOffset(state)
	}
}


/// Check if a double quoted string has any interpolation. The input must start at the
/// opening quote.
pub(super) fn is_interpolated(input: &[u8]) -> bool {
	let mut iter = input.iter().skip(1).peekable();

	while let Some(&c) = iter.next() {
		match (c, iter.peek()) {
			(b'\\', _) => {
				iter.next();
			}

			(b'"', _) => return false,

			(b'$', Some(&&next)) if next.is_word_start() || next == b'{' => return true,

			(b'{', Some(&&b'$')) => return true,

			_ => (),
		}
	}

	false
}


/// Check if the input starts a heredoc or nowdoc, returning the length of the start token
/// (including the newline) and the string delimiter.
pub(super) fn heredoc_start(input: &[u8]) -> Option<(usize, Delimiter)> {
	let mut ix = 3; // <<<

	while matches!(input.get(ix), Some(b' ') | Some(b'\t')) {
		ix += 1;
	}

	let quote = match input.get(ix) {
		Some(&c @ b'\'') | Some(&c @ b'"') => {
			ix += 1;
			Some(c)
		}
		_ => None,
	};

	let label_start = ix;
	if !input.get(ix)?.is_word_start() {
		return None;
	}
	while input.get(ix).map_or(false, |c| c.is_word()) {
		ix += 1;
	}
	let label = &input[label_start .. ix];

	if let Some(quote) = quote {
		if input.get(ix) != Some(&quote) {
			return None;
		}
		ix += 1;
	}

	let rest = &input[ix ..];
	let newline = if rest.starts_with(b"\r\n") {
		2
	} else if rest.starts_with(b"\n") {
		1
	} else {
		return None;
	};

	let delimiter = Delimiter::Heredoc {
		label: label.into(),
		nowdoc: quote == Some(b'\''),
	};

	Some((ix + newline, delimiter))
}


/// Check if the input starts with the closing label of a heredoc, which may be indented.
/// Returns the length of the closing token.
fn heredoc_end(input: &[u8], label: &[u8]) -> Option<usize> {
	let indentation = input
		.iter()
		.take_while(|&&c| c == b' ' || c == b'\t')
		.count();

	let rest = &input[indentation ..];
	let after = rest.get(label.len()).copied();

	if rest.starts_with(label) && !after.map_or(false, |c| c.is_word()) {
		Some(indentation + label.len())
	} else {
		None
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_is_interpolated() {
		assert!(is_interpolated(br#""hello $name""#));
		assert!(is_interpolated(br#""hello {$user->name}""#));
		assert!(is_interpolated(br#""hello ${name}""#));
		assert!(!is_interpolated(br#""hello \$name""#));
		assert!(!is_interpolated(br#""price: 5$""#));
		assert!(!is_interpolated(br#""done" . $name"#));
	}


	#[test]
	fn test_heredoc_start() {
		assert_eq!(
			heredoc_start(b"<<<EOT\nbody"),
			Some((7, Delimiter::Heredoc { label: b"EOT"[..].into(), nowdoc: false }))
		);
		assert_eq!(
			heredoc_start(b"<<< \"EOT\"\r\n"),
			Some((11, Delimiter::Heredoc { label: b"EOT"[..].into(), nowdoc: false }))
		);
		assert_eq!(
			heredoc_start(b"<<<'EOT'\n"),
			Some((9, Delimiter::Heredoc { label: b"EOT"[..].into(), nowdoc: true }))
		);
		assert_eq!(heredoc_start(b"<<<EOT body"), None);
		assert_eq!(heredoc_start(b"<<<'EOT\n"), None);
	}


	#[test]
	fn test_heredoc_end() {
		assert_eq!(heredoc_end(b"EOT;\n", b"EOT"), Some(3));
		assert_eq!(heredoc_end(b"    EOT\n", b"EOT"), Some(7));
		assert_eq!(heredoc_end(b"EOTX\n", b"EOT"), None);
		assert_eq!(heredoc_end(b"text EOT\n", b"EOT"), None);
	}
}
