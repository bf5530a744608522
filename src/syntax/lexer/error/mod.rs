mod fmt;

use super::SourcePos;


/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
	/// Unexpected character.
	Unexpected(u8),
	/// Quoted string without the closing quote.
	UnterminatedString,
	/// Block comment without the closing `*/`.
	UnterminatedComment,
	/// Heredoc or nowdoc without the closing label.
	UnterminatedHeredoc(Box<[u8]>),
	/// Interpolation block (`{$` or `${`) without the closing brace.
	UnterminatedInterpolation,
}


/// A lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub error: ErrorKind,
	pub pos: SourcePos,
}


impl std::error::Error for Error {}


impl Error {
	pub fn unexpected(input: u8, pos: SourcePos) -> Self {
		Self { error: ErrorKind::Unexpected(input), pos }
	}

	pub fn unterminated_string(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedString, pos }
	}

	pub fn unterminated_comment(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedComment, pos }
	}

	pub fn unterminated_heredoc(label: &[u8], pos: SourcePos) -> Self {
		Self {
			error: ErrorKind::UnterminatedHeredoc(label.into()),
			pos,
		}
	}

	pub fn unterminated_interpolation(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedInterpolation, pos }
	}
}
