mod automata;
mod cursor;
mod error;
#[cfg(test)]
mod tests;
mod token;

use automata::Automata;
use super::Source;
pub use cursor::{Cursor, SourcePos};
pub use error::{Error, ErrorKind};
pub use token::{Keyword, MagicConstant, Token, TokenKind};


/// The lexer for php source code. Produces every token in the source, including
/// whitespace, comments and inline html, so that the tokens can be joined back into the
/// original text.
#[derive(Debug)]
pub struct Lexer<'a>(Automata<'a>);


impl<'a> Lexer<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self(Automata::new(cursor))
	}
}


impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}
