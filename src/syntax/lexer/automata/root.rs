use super::{
	html::{close_tag, Html},
	string::{self, Delimiter},
	symbol,
	token,
	word::IsWord,
	BlockComment,
	Cursor,
	Encapsed,
	Error,
	LineComment,
	Number,
	Quoted,
	SourcePos,
	Span,
	State,
	TokenKind,
	Transition,
	Variable,
	Word,
};


/// Code embedded in a string through `{$` or `${`. Once the braces are balanced, the
/// automata returns to the string.
#[derive(Debug)]
pub(super) struct Embed {
	/// How many braces have been opened inside the embedded code.
	depth: u32,
	/// Whether the next word is a variable name, as in `${name}`.
	varname: bool,
	/// The string to return to.
	string: Encapsed,
	/// The position of the interpolation.
	pos: SourcePos,
}


/// The top level state for php code.
#[derive(Debug, Default)]
pub(super) struct Root {
	embed: Option<Box<Embed>>,
}


impl Root {
	/// Code embedded in the given string.
	pub fn embedded(string: Encapsed, varname: bool, pos: SourcePos) -> Self {
		Self {
			embed: Some(
				Box::new(
					Embed { depth: 0, varname, string: string.restart(), pos }
				)
			)
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let pos = cursor.pos();
		let single = |c: u8| token(TokenKind::Char(c), &[c], pos);

		let varname = match self.embed.as_deref_mut() {
			Some(embed) => std::mem::take(&mut embed.varname),
			None => false,
		};

		match cursor.peek() {
			// Whitespace.
			Some(c) if c.is_ascii_whitespace() => Transition::resume(Whitespace::at(cursor, self)),

			// Attributes.
			Some(b'#') if cursor.peek_at(1) == Some(b'[') => {
				Transition::resume(Span::new(cursor, 2, TokenKind::Attribute, self))
			}

			// Comments.
			Some(b'#') => Transition::resume(LineComment::at(cursor, self)),
			Some(b'/') if cursor.peek_at(1) == Some(b'/') => {
				Transition::resume(LineComment::at(cursor, self))
			}
			Some(b'/') if cursor.peek_at(1) == Some(b'*') => {
				Transition::resume(BlockComment::at(cursor, self))
			}

			// Close tag, back to html.
			Some(b'?') if cursor.peek_at(1) == Some(b'>') => {
				let length = close_tag(cursor.rest()).unwrap_or(2);
				Transition::resume(Span::new(cursor, length, TokenKind::CloseTag, Html::new()))
			}

			// Variables.
			Some(b'$') if cursor.peek_at(1).map_or(false, |c| c.is_word_start()) => {
				Transition::resume(Variable::at(cursor, self))
			}

			// String literals.
			Some(b'\'') => Transition::resume(Quoted::at(cursor, self)),
			Some(b'"') if string::is_interpolated(cursor.rest()) => {
				let string = Encapsed::new(Delimiter::Quote, self, pos);
				Transition::resume(Span::new(cursor, 1, TokenKind::Char(b'"'), string))
			}
			Some(b'"') => Transition::resume(Quoted::at(cursor, self)),
			Some(b'`') => {
				let string = Encapsed::new(Delimiter::Backtick, self, pos);
				Transition::resume(Span::new(cursor, 1, TokenKind::Char(b'`'), string))
			}

			// Heredoc and nowdoc.
			Some(b'<') if cursor.looking_at(b"<<<") => {
				match string::heredoc_start(cursor.rest()) {
					Some((length, delimiter)) => {
						let string = Encapsed::new(delimiter, self, pos);
						Transition::resume(Span::new(cursor, length, TokenKind::StartHeredoc, string))
					}

					None => self.symbol(cursor, b'<'),
				}
			}

			// Number literals.
			Some(c) if c.is_ascii_digit() => Transition::resume(Number::at(cursor, self)),
			Some(b'.') if cursor.peek_at(1).map_or(false, |c| c.is_ascii_digit()) => {
				Transition::resume(Number::at(cursor, self))
			}

			// Identifiers, keywords and magic constants.
			Some(c) if c.is_word_start() => Transition::resume(Word::at(cursor, self, varname)),

			Some(b'\\') => {
				Transition::produce(self, token(TokenKind::NsSeparator, b"\\", pos))
			}

			// Braces must be tracked to know when embedded code ends.
			Some(b'{') => {
				if let Some(embed) = self.embed.as_deref_mut() {
					embed.depth += 1;
				}

				Transition::produce(self, single(b'{'))
			}

			Some(b'}') => match self.embed.take() {
				Some(embed) if embed.depth == 0 => Transition::produce(embed.string, single(b'}')),

				Some(mut embed) => {
					embed.depth -= 1;
					self.embed = Some(embed);
					Transition::produce(self, single(b'}'))
				}

				None => Transition::produce(self, single(b'}')),
			},

			Some(c) if c.is_ascii_control() => Transition::error(self, Error::unexpected(c, pos)),

			// Symbols.
			Some(c) => self.symbol(cursor, c),

			// Eof.
			None => match self.embed {
				Some(embed) => {
					Transition::error(Root::default(), Error::unterminated_interpolation(embed.pos))
				}

				None => Transition::step(self),
			},
		}
	}


	/// Lex a symbol starting with the given character.
	fn symbol(self, cursor: &Cursor, first: u8) -> Transition {
		match symbol::operator(cursor.rest(), first) {
			(1, kind) => Transition::produce(self, token(kind, &[first], cursor.pos())),
			(length, kind) => Transition::resume(Span::new(cursor, length, kind, self)),
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}


/// The state for lexing whitespace.
#[derive(Debug)]
pub(super) struct Whitespace {
	start_offset: usize,
	pos: SourcePos,
	root: Root,
}


impl Whitespace {
	pub fn at(cursor: &Cursor, root: Root) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos(), root }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			Some(c) if c.is_ascii_whitespace() => Transition::step(self),

			_ => {
				let text = cursor.lexeme(self.start_offset);
				Transition::resume_produce(self.root, token(TokenKind::Whitespace, text, self.pos))
			}
		}
	}
}


impl From<Whitespace> for State {
	fn from(state: Whitespace) -> State {
		State::Whitespace(state)
	}
}
