use super::{token, Cursor, Root, SourcePos, State, TokenKind, Transition};
use crate::syntax::lexer::{Keyword, MagicConstant};


/// The state for lexing identifiers, keywords and magic constants.
#[derive(Debug)]
pub(super) struct Word {
	start_offset: usize,
	pos: SourcePos,
	/// Whether the word is the variable name in `${name}`.
	varname: bool,
	root: Root,
}


impl Word {
	pub fn at(cursor: &Cursor, root: Root, varname: bool) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos(), varname, root }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		// We don't need to check if the first character is a number here, because the Root
		// state will only transition to this state if that is the case.
		match cursor.peek() {
			// Word character.
			Some(c) if c.is_word() => Transition::step(self),

			// If we visit EOF or a non-identifier character, we should just produce.
			_ => {
				let word = cursor.lexeme(self.start_offset);

				let kind = if self.varname {
					TokenKind::StringVarname
				} else if is_name_segment(cursor, self.start_offset, word) {
					TokenKind::Identifier
				} else {
					to_token(word)
				};

				Transition::resume_produce(self.root, token(kind, word, self.pos))
			}
		}
	}
}


impl From<Word> for State {
	fn from(state: Word) -> State {
		State::Word(state)
	}
}


/// Keywords that stay keywords when directly followed by a separator, as in
/// `return\count($x)` or `namespace\name`.
const PREFIX_KEYWORDS: &[&[u8]] = &[
	b"namespace", b"return", b"new", b"echo", b"print", b"throw", b"yield", b"case",
	b"instanceof", b"include", b"include_once", b"require", b"require_once", b"clone",
	b"else", b"and", b"or", b"xor", b"use", b"extends", b"implements", b"insteadof",
];


/// Words that are part of a qualified name, or that follow an object operator, are never
/// keywords, except for the keywords that may directly precede a name.
fn is_name_segment(cursor: &Cursor, start_offset: usize, word: &[u8]) -> bool {
	let after_separator = cursor.follows(start_offset, b"\\");
	let after_arrow = cursor.follows(start_offset, b"->");
	let before_separator = cursor.peek() == Some(b'\\')
		&& !PREFIX_KEYWORDS
			.iter()
			.any(|keyword| word.eq_ignore_ascii_case(keyword));

	after_separator || after_arrow || before_separator
}


pub fn to_token(word: &[u8]) -> TokenKind {
	let lowercase = word.to_ascii_lowercase();

	if let Some(magic) = MagicConstant::from_lowercase(&lowercase) {
		TokenKind::Magic(magic)
	} else if let Some(keyword) = Keyword::from_lowercase(&lowercase) {
		TokenKind::Keyword(keyword)
	} else {
		TokenKind::Identifier
	}
}


/// The state for lexing variables.
#[derive(Debug)]
pub(super) struct Variable {
	start_offset: usize,
	pos: SourcePos,
	root: Root,
}


impl Variable {
	pub fn at(cursor: &Cursor, root: Root) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos(), root }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// The dollar sign.
			Some(_) if cursor.offset() == self.start_offset => Transition::step(self),

			Some(c) if c.is_word() => Transition::step(self),

			_ => {
				let text = cursor.lexeme(self.start_offset);
				Transition::resume_produce(self.root, token(TokenKind::Variable, text, self.pos))
			}
		}
	}
}


impl From<Variable> for State {
	fn from(state: Variable) -> State {
		State::Variable(state)
	}
}


/// Helper trait for checking if a character is a valid word constituent.
/// Bytes above 0x7f are valid in identifiers.
pub trait IsWord {
	fn is_word_start(&self) -> bool;
	fn is_word(&self) -> bool;
}


impl IsWord for u8 {
	fn is_word_start(&self) -> bool {
		self.is_ascii_alphabetic() || *self == b'_' || *self >= 0x80
	}

	fn is_word(&self) -> bool {
		self.is_ascii_alphanumeric() || *self == b'_' || *self >= 0x80
	}
}
