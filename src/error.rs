use std::{
	fmt::{self, Display},
	path::Path,
};

use crate::syntax::lexer;


/// The line range of a closure in it's defining file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureRange {
	pub path: Box<Path>,
	pub start: u32,
	pub end: u32,
}


impl Display for ClosureRange {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{}-{}", self.path.display(), self.start, self.end)
	}
}


/// How the tokens of a closure range failed to form a closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
	/// No closure expression starts in the range.
	NoClosure,
	/// The closure starts in the range, but it's body doesn't end in it.
	Unterminated,
}


impl Display for MalformedKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::NoClosure => "no closure expression found".fmt(f),
			Self::Unterminated => "unterminated closure".fmt(f),
		}
	}
}


/// Reconstruction errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: Box<Path>,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to tokenize {}: {error}", .path.display())]
	Lexer {
		path: Box<Path>,
		#[source]
		error: lexer::Error,
	},

	#[error("no tokens in closure range {0}")]
	MalformedRange(ClosureRange),

	#[error("{kind} in closure range {range}, at line {line}")]
	Malformed {
		range: ClosureRange,
		line: u32,
		kind: MalformedKind,
	},
}


impl Error {
	pub fn io<P: Into<Box<Path>>>(path: P, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}


	pub fn lexer<P: Into<Box<Path>>>(path: P, error: lexer::Error) -> Self {
		Self::Lexer { path: path.into(), error }
	}


	pub fn malformed(range: ClosureRange, line: u32, kind: MalformedKind) -> Self {
		Self::Malformed { range, line, kind }
	}
}
