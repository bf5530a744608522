mod args;
mod body;
mod header;
mod ident;

use std::collections::BTreeSet;

use fxhash::FxHashSet;

use self::{
	args::{Args, ReturnType, UseClause},
	body::{Anonymous, Body, IgnoreNext},
	header::{Function, Named, Start, Static},
	ident::{IdentName, IdentStart},
};
use super::{
	magic::Magic,
	resolve::{self, Resolver},
	Descriptor,
};
use crate::{error::MalformedKind, syntax::Token};


/// The register of the scanner. States read and update it as tokens are visited.
#[derive(Debug)]
pub struct Scan<'a> {
	/// The reconstructed code.
	code: String,
	/// Whether the closure is an arrow function.
	short: bool,
	/// Brace depth of the body. Arrow functions also count parenthesis and brackets.
	depth: u32,
	/// The depth where the current anonymous class body started, if inside one.
	anonymous: Option<u32>,
	/// Variables in the use clause of the closure.
	uses: Vec<Box<str>>,
	/// Parameters of the closure.
	params: FxHashSet<Box<str>>,
	/// Variables used in the body of an arrow function.
	variables: FxHashSet<Box<str>>,
	using_this: bool,
	using_scope: bool,
	resolver: Resolver<'a>,
	magic: Magic<'a>,
}


impl<'a> Scan<'a> {
	pub fn new(resolver: Resolver<'a>, magic: Magic<'a>) -> Self {
		Self {
			code: String::with_capacity(256),
			short: false,
			depth: 0,
			anonymous: None,
			uses: Vec::new(),
			params: FxHashSet::default(),
			variables: FxHashSet::default(),
			using_this: false,
			using_scope: false,
			resolver,
			magic,
		}
	}


	/// Build the descriptor, given the variables captured at runtime.
	pub fn finish(self, live: &[&str]) -> Descriptor {
		let captures: BTreeSet<Box<str>> = if self.short {
			live
				.iter()
				.filter(|name| self.variables.contains(**name) && !self.params.contains(**name))
				.map(|&name| name.into())
				.collect()
		} else {
			self.uses
				.iter()
				.filter(|name| live.contains(&&***name))
				.cloned()
				.collect()
		};

		let is_static = self.code
			.get(.. 6)
			.map_or(false, |prefix| prefix.eq_ignore_ascii_case("static"));

		Descriptor {
			source: self.code,
			captures,
			is_static,
			is_short: self.short,
			requires_instance_binding: self.using_this,
			requires_scope_binding: self.using_scope,
		}
	}


	fn push(&mut self, text: &str) {
		self.code.push_str(text);
	}


	/// The scope keywords inside an anonymous class refer to that class.
	fn use_scope(&mut self) {
		if self.anonymous.is_none() {
			self.using_scope = true;
		}
	}


	/// Record a variable from the body.
	fn variable(&mut self, name: &str) {
		if name == "$this" {
			if self.anonymous.is_none() {
				self.using_this = true;
			}
		} else if self.short {
			self.variables.insert(name.trim_start_matches('$').into());
		}
	}


	/// Resolve a name in a position where only class names are allowed.
	fn class_name(&mut self, name: &str) -> String {
		if resolve::is_absolute(name) || resolve::is_builtin_type(name) {
			name.into()
		} else if resolve::is_scope_keyword(name) {
			self.use_scope();
			name.into()
		} else {
			self.resolver.class_name(name)
		}
	}
}


/// The transition to be made after a token has been visited.
#[derive(Debug)]
struct Transition {
	/// The next state.
	state: State,
	/// Whether to consume the visited token.
	consume: bool,
}


impl Transition {
	/// Consume the token while updating the machine state.
	pub fn step<S: Into<State>>(state: S) -> Self {
		Self { state: state.into(), consume: true }
	}

	/// Don't consume the token, visiting it again in the given state.
	pub fn resume<S: Into<State>>(state: S) -> Self {
		Self { state: state.into(), consume: false }
	}

	/// The closure has ended. The token is not part of it.
	pub fn finish() -> Self {
		Self { state: State::Done, consume: true }
	}
}


/// All states in the automata.
#[derive(Debug)]
enum State {
	// Before the body:
	Start(Start),
	Static(Static),
	Function(Function),
	Named(Named),
	Args(Args),
	UseClause(UseClause),
	ReturnType(ReturnType),

	// Body:
	Body(Body),
	IgnoreNext(IgnoreNext),
	IdentStart(IdentStart),
	IdentName(IdentName),
	Anonymous(Anonymous),

	Done,
}


impl Default for State {
	fn default() -> Self {
		Start.into()
	}
}


impl State {
	fn visit(self, token: &Token, scan: &mut Scan) -> Transition {
		match self {
			State::Start(state) => state.visit(token, scan),
			State::Static(state) => state.visit(token, scan),
			State::Function(state) => state.visit(token, scan),
			State::Named(state) => state.visit(token, scan),
			State::Args(state) => state.visit(token, scan),
			State::UseClause(state) => state.visit(token, scan),
			State::ReturnType(state) => state.visit(token, scan),

			State::Body(state) => state.visit(token, scan),
			State::IgnoreNext(state) => state.visit(token, scan),
			State::IdentStart(state) => state.visit(token, scan),
			State::IdentName(state) => state.visit(token, scan),
			State::Anonymous(state) => state.visit(token, scan),

			State::Done => Transition::finish(),
		}
	}


	/// Check whether the closure may end with the tokens.
	fn at_eof(self, scan: &mut Scan) -> Result<(), MalformedKind> {
		match self {
			State::Done => Ok(()),

			State::Start(_) | State::Static(_) | State::Named(_) => Err(MalformedKind::NoClosure),

			// Arrow functions may end with the last token.
			State::Body(_) if scan.short && scan.depth == 0 => Ok(()),

			State::IgnoreNext(state) => (*state.resume).at_eof(scan),
			State::IdentStart(state) => (*state.resume).at_eof(scan),
			State::IdentName(state) => state.flush_eof(scan).at_eof(scan),

			_ => Err(MalformedKind::Unterminated),
		}
	}
}


/// Scan the tokens of a closure range. On failure, returns the offending line.
pub fn run(tokens: &[Token], scan: &mut Scan) -> Result<(), (u32, MalformedKind)> {
	let mut state = State::default();
	let mut ix = 0;

	while let Some(token) = tokens.get(ix) {
		let transition = state.visit(token, scan);
		state = transition.state;

		if transition.consume {
			ix += 1;
		}

		if let State::Done = state {
			log::trace!("closure ends at line {}", token.line);
			return Ok(());
		}
	}

	let line = tokens.last().map_or(0, |token| token.line);

	state
		.at_eof(scan)
		.map_err(|kind| (line, kind))
}
