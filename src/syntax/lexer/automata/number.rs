use super::{token, Cursor, Root, SourcePos, State, TokenKind, Transition};


/// The state for lexing numeric literals, both integer and float.
/// Literals are not validated, only delimited.
#[derive(Debug)]
pub(super) struct Number {
	start_offset: usize,
	pos: SourcePos,
	/// Hexadecimal, octal or binary literal, with a prefix.
	radix: bool,
	consumed_decimal: bool,
	consumed_exponent: bool,
	root: Root,
}


impl Number {
	pub fn at(cursor: &Cursor, root: Root) -> Self {
		Self {
			start_offset: cursor.offset(),
			pos: cursor.pos(),
			radix: false,
			consumed_decimal: false,
			consumed_exponent: false,
			root,
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let offset = cursor.offset();
		let digit_at = |n: usize| cursor.peek_at(n).map_or(false, |c| c.is_ascii_digit());

		match cursor.peek() {
			// Radix prefix: 0x, 0o, 0b.
			Some(b'x') | Some(b'X') | Some(b'o') | Some(b'O') | Some(b'b') | Some(b'B')
				if offset == self.start_offset + 1 && cursor.before(offset) == Some(b'0') =>
			{
				self.radix = true;
				Transition::step(self)
			}

			Some(c) if self.radix && (c.is_ascii_hexdigit() || c == b'_') => Transition::step(self),

			Some(c) if !self.radix && (c.is_ascii_digit() || c == b'_') => Transition::step(self),

			// There must be up to one dot, and it must precede the exponent.
			Some(b'.')
				if !self.radix
					&& !self.consumed_decimal
					&& !self.consumed_exponent
					&& (offset == self.start_offset || digit_at(1)) =>
			{
				self.consumed_decimal = true;
				Transition::step(self)
			}

			// The exponent must be followed by digits, possibly signed.
			Some(b'e') | Some(b'E')
				if !self.radix
					&& !self.consumed_exponent
					&& (digit_at(1)
						|| (matches!(cursor.peek_at(1), Some(b'+') | Some(b'-')) && digit_at(2))) =>
			{
				self.consumed_exponent = true;
				Transition::step(self)
			}

			Some(b'+') | Some(b'-')
				if self.consumed_exponent && matches!(cursor.before(offset), Some(b'e') | Some(b'E')) =>
			{
				Transition::step(self)
			}

			// Stop and produce if anything else is found, including EOF.
			_ => {
				let text = cursor.lexeme(self.start_offset);
				Transition::resume_produce(self.root, token(TokenKind::Number, text, self.pos))
			}
		}
	}
}


impl From<Number> for State {
	fn from(state: Number) -> State {
		State::Number(state)
	}
}
