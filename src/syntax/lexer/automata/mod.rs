mod comment;
mod html;
mod number;
mod root;
mod span;
mod string;
mod symbol;
mod word;

use self::{
	comment::{BlockComment, LineComment},
	html::Html,
	number::Number,
	root::{Root, Whitespace},
	span::Span,
	string::{Encapsed, EncapsedOffset, EncapsedProperty, EncapsedVariable, Quoted},
	word::{Variable, Word},
};
use super::{Cursor, Error, SourcePos, Token, TokenKind};


/// The automata may produce a token, or an error.
type Output = Result<Token, Error>;


/// Build a token from a slice of the input.
fn token(kind: TokenKind, text: &[u8], pos: SourcePos) -> Token {
	Token {
		kind,
		text: String::from_utf8_lossy(text).into(),
		line: pos.line,
	}
}


/// The transition to be made after a character in the input has been visited.
#[derive(Debug)]
struct Transition {
	/// The next state.
	state: State,
	/// Whether to consume the visited input character.
	consume: bool,
	/// The produced output, if any.
	output: Option<Output>,
}


impl Transition {
	/// Consume the character while updating the machine state, but not producing a token
	/// yet.
	pub fn step<S: Into<State>>(state: S) -> Self {
		Self { state: state.into(), consume: true, output: None }
	}

	/// Consume the input character and produce a token.
	pub fn produce<S: Into<State>>(state: S, token: Token) -> Self {
		Self {
			state: state.into(),
			consume: true,
			output: Some(Ok(token)),
		}
	}

	/// Consume the input character and produce an error.
	pub fn error<S: Into<State>>(state: S, error: Error) -> Self {
		Self {
			state: state.into(),
			consume: true,
			output: Some(Err(error)),
		}
	}

	/// Don't consume the input character, updating the machine state instead.
	pub fn resume<S: Into<State>>(state: S) -> Self {
		Self { state: state.into(), consume: false, output: None }
	}

	/// Don't consume the input character, but produce a token.
	pub fn resume_produce<S: Into<State>>(state: S, output: Token) -> Self {
		Self {
			state: state.into(),
			consume: false,
			output: Some(Ok(output)),
		}
	}
}


/// All states in the automata.
#[derive(Debug)]
enum State {
	// Outside of php tags:
	Html(Html),

	// Php code:
	Root(Root),
	Span(Span),
	Whitespace(Whitespace),
	LineComment(LineComment),
	BlockComment(BlockComment),
	Word(Word),
	Variable(Variable),
	Number(Number),
	Quoted(Quoted),

	// Interpolated strings:
	Encapsed(Encapsed),
	EncapsedVariable(EncapsedVariable),
	EncapsedProperty(EncapsedProperty),
	EncapsedOffset(EncapsedOffset),
}


impl Default for State {
	fn default() -> Self {
		Html::new().into()
	}
}


impl State {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match self {
			State::Html(state) => state.visit(cursor),

			State::Root(state) => state.visit(cursor),
			State::Span(state) => state.visit(cursor),
			State::Whitespace(state) => state.visit(cursor),
			State::LineComment(state) => state.visit(cursor),
			State::BlockComment(state) => state.visit(cursor),
			State::Word(state) => state.visit(cursor),
			State::Variable(state) => state.visit(cursor),
			State::Number(state) => state.visit(cursor),
			State::Quoted(state) => state.visit(cursor),

			State::Encapsed(state) => state.visit(cursor),
			State::EncapsedVariable(state) => state.visit(cursor),
			State::EncapsedProperty(state) => state.visit(cursor),
			State::EncapsedOffset(state) => state.visit(cursor),
		}
	}
}


/// The automata instance.
#[derive(Debug)]
pub(super) struct Automata<'a> {
	state: State,
	cursor: Cursor<'a>,
}


impl<'a> Automata<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self { state: State::default(), cursor }
	}
}


impl<'a> Iterator for Automata<'a> {
	type Item = Output;

	fn next(&mut self) -> Option<Output> {
		loop {
			// We must temporarily take the state so that we can consume it.
			let state = std::mem::take(&mut self.state);

			let transition = state.visit(&self.cursor);

			self.state = transition.state;

			// Check EOF *before* stepping.
			let eof = self.cursor.is_eof();

			if transition.consume {
				self.cursor.step();
			}

			if let Some(output) = transition.output {
				return Some(output);
			}

			// A state may still resume into another one at EOF, which may have something to
			// produce, like the error for an unterminated string.
			if eof && transition.consume {
				return None;
			}
		}
	}
}
