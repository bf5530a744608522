use std::fmt::{self, Display};

use super::Source;


/// A line and column in a php file. Lines are 1-based, as reported by reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos {
	pub line: u32,
	pub column: u32,
}


impl SourcePos {
	/// Advance past the given byte. A `\r\n` pair counts as a single line break, as the
	/// `\r` only moves the column.
	fn advance(&mut self, input: u8) {
		if input == b'\n' {
			self.line += 1;
			self.column = 0;
		} else {
			self.column += 1;
		}
	}
}


impl Default for SourcePos {
	fn default() -> Self {
		Self { line: 1, column: 0 }
	}
}


impl Display for SourcePos {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "line {}, column {}", self.line, self.column)
	}
}


/// A byte cursor over a php file, with lookahead for tags, heredocs and operators, and
/// lookbehind for name segments.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a [u8],
	offset: usize,
	pos: SourcePos,
}


impl<'a> Cursor<'a> {
	pub fn pos(&self) -> SourcePos {
		self.pos
	}


	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn is_eof(&self) -> bool {
		self.offset >= self.input.len()
	}


	pub fn peek(&self) -> Option<u8> {
		self.peek_at(0)
	}


	/// Peek the byte `n` positions ahead of the current one.
	pub fn peek_at(&self, n: usize) -> Option<u8> {
		self.input.get(self.offset + n).copied()
	}


	/// The input that hasn't been consumed yet, including the current byte.
	pub fn rest(&self) -> &'a [u8] {
		self.input.get(self.offset ..).unwrap_or_default()
	}


	/// Whether the unconsumed input starts with the given text.
	pub fn looking_at(&self, text: &[u8]) -> bool {
		self.rest().starts_with(text)
	}


	/// The byte right before the given offset, if any.
	pub fn before(&self, offset: usize) -> Option<u8> {
		offset
			.checked_sub(1)
			.and_then(|ix| self.input.get(ix))
			.copied()
	}


	/// Whether the input right before the given offset ends with the given text.
	pub fn follows(&self, offset: usize, text: &[u8]) -> bool {
		self.input
			.get(.. offset)
			.map_or(false, |prefix| prefix.ends_with(text))
	}


	/// The lexeme from the given offset up to the current byte, exclusive.
	pub fn lexeme(&self, start: usize) -> &'a [u8] {
		self.input
			.get(start .. self.offset.min(self.input.len()))
			.unwrap_or_default()
	}


	/// The lexeme from the given offset up to the current byte, inclusive.
	pub fn lexeme_through(&self, start: usize) -> &'a [u8] {
		self.input
			.get(start ..= self.offset)
			.unwrap_or_else(|| self.lexeme(start))
	}


	pub fn step(&mut self) {
		if let Some(&input) = self.input.get(self.offset) {
			self.pos.advance(input);
			self.offset += 1;
		}
	}
}


impl<'a> From<&'a [u8]> for Cursor<'a> {
	fn from(input: &'a [u8]) -> Self {
		Self {
			input,
			offset: 0,
			pos: SourcePos::default()
		}
	}
}


impl<'a> From<&'a Source> for Cursor<'a> {
	fn from(source: &'a Source) -> Self {
		Self::from(&*source.contents)
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_lookaround() {
		let mut cursor = Cursor::from(&b"$a->b\r\nc"[..]);

		for _ in 0 .. 4 {
			cursor.step();
		}

		assert_eq!(cursor.peek(), Some(b'b'));
		assert!(cursor.follows(cursor.offset(), b"->"));
		assert!(!cursor.follows(cursor.offset(), b"\\"));
		assert_eq!(cursor.lexeme(0), b"$a->");
		assert_eq!(cursor.lexeme_through(2), b"->b");
		assert!(cursor.looking_at(b"b\r\n"));

		while !cursor.is_eof() {
			cursor.step();
		}

		assert_eq!(cursor.pos(), SourcePos { line: 2, column: 1 });
		assert_eq!(cursor.lexeme(5), b"\r\nc");
		assert_eq!(cursor.lexeme_through(7), b"c");
		assert_eq!(cursor.rest(), b"");
		assert_eq!(cursor.peek(), None);
	}
}
