use crate::syntax::{Keyword, Token, TokenKind};
use super::{FileSymbols, NamespaceSpan, StructureKind, StructureSpan};


/// Which alias map an import goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ImportKind {
	Class,
	Function,
	Constant,
}


impl Default for ImportKind {
	fn default() -> Self {
		Self::Class
	}
}


/// An import statement: `use [function|const] Name [as Alias], ...;`, possibly with
/// grouped entries: `use Prefix\{A, function b as c};`.
#[derive(Debug, Default)]
pub(super) struct Import {
	/// The qualifier of the whole statement.
	kind: ImportKind,
	/// The common prefix, when inside a group.
	group: Option<String>,
	/// The qualifier of the current group entry.
	entry: Option<ImportKind>,
	name: String,
	alias: String,
}


impl Import {
	pub fn visit(mut self, token: &Token, symbols: &mut FileSymbols) -> State {
		match token.kind {
			TokenKind::Keyword(Keyword::Function) => self.qualify(ImportKind::Function),
			TokenKind::Keyword(Keyword::Const) => self.qualify(ImportKind::Constant),

			TokenKind::NsSeparator => self.name.push('\\'),

			TokenKind::Identifier => {
				self.name.push_str(&token.text);
				self.alias.clear();
				self.alias.push_str(&token.text);
			}

			TokenKind::Keyword(Keyword::As) => return Alias(self).into(),

			TokenKind::Char(b'{') if self.group.is_none() => {
				self.group = Some(std::mem::take(&mut self.name));
				self.alias.clear();
			}

			TokenKind::Char(b',') => self.finish(symbols),

			TokenKind::Char(b'}') if self.group.is_some() => {
				self.finish(symbols);
				self.group = None;
			}

			TokenKind::Char(b';') => {
				self.finish(symbols);
				return Start.into();
			}

			_ => (),
		}

		self.into()
	}


	fn qualify(&mut self, kind: ImportKind) {
		if self.group.is_some() {
			self.entry = Some(kind);
		} else {
			self.kind = kind;
		}
	}


	/// Register the current entry, if any, and reset it.
	fn finish(&mut self, symbols: &mut FileSymbols) {
		if !self.alias.is_empty() {
			let name = match &self.group {
				Some(prefix) => format!("{}{}", prefix, self.name),
				None => self.name.clone(),
			};

			let target = if name.starts_with('\\') {
				name
			} else {
				format!("\\{}", name)
			};

			let kind = self.entry.unwrap_or(self.kind);

			symbols.table.insert(kind, &self.alias, target.into());
		}

		self.name.clear();
		self.alias.clear();
		self.entry = None;
	}
}


impl From<Import> for State {
	fn from(state: Import) -> State {
		State::Import(state)
	}
}


/// The alias after `as` in an import.
#[derive(Debug)]
pub(super) struct Alias(Import);


impl Alias {
	pub fn visit(self, token: &Token) -> State {
		let Self(mut import) = self;

		match token.kind {
			TokenKind::Identifier => {
				import.alias.clear();
				import.alias.push_str(&token.text);
				import.into()
			}

			_ => Self(import).into(),
		}
	}
}


impl From<Alias> for State {
	fn from(state: Alias) -> State {
		State::Alias(state)
	}
}


/// A namespace declaration, either `namespace Name;` or `namespace Name { ... }`.
#[derive(Debug)]
pub(super) struct Namespace {
	name: String,
	line: u32,
}


impl Namespace {
	pub fn visit(mut self, token: &Token, symbols: &mut FileSymbols) -> State {
		match token.kind {
			_ if token.kind.is_trivia() => self.into(),

			// A relative name, as in `namespace\foo()`.
			TokenKind::NsSeparator if self.name.is_empty() => Start.into(),

			TokenKind::Identifier | TokenKind::NsSeparator => {
				self.name.push_str(&token.text);
				self.into()
			}

			TokenKind::Char(b';') | TokenKind::Char(b'{') => {
				symbols.namespaces.push(
					NamespaceSpan {
						name: self.name.trim_start_matches('\\').into(),
						line: self.line,
					}
				);

				Start.into()
			}

			_ => Start.into(),
		}
	}
}


impl From<Namespace> for State {
	fn from(state: Namespace) -> State {
		State::Namespace(state)
	}
}


/// A class, interface or trait keyword, waiting for the structure name.
#[derive(Debug)]
pub(super) struct BeforeStructure {
	kind: StructureKind,
	line: u32,
}


impl BeforeStructure {
	pub fn visit(self, token: &Token) -> State {
		match token.kind {
			TokenKind::Identifier => {
				let span = StructureSpan {
					kind: self.kind,
					name: token.text.clone(),
					start: self.line,
					end: self.line,
				};

				Structure { span: Some(span), depth: 0 }.into()
			}

			_ => self.into(),
		}
	}
}


impl From<BeforeStructure> for State {
	fn from(state: BeforeStructure) -> State {
		State::BeforeStructure(state)
	}
}


/// The body of a declaration, until the braces are balanced. Function declarations and
/// anonymous classes are tracked but not recorded.
#[derive(Debug)]
pub(super) struct Structure {
	span: Option<StructureSpan>,
	depth: u32,
}


impl Structure {
	pub fn ignored() -> Self {
		Self { span: None, depth: 0 }
	}


	pub fn visit(mut self, token: &Token, symbols: &mut FileSymbols) -> State {
		match token.kind {
			kind if kind.is_open_brace() => {
				self.depth += 1;
				self.into()
			}

			TokenKind::Char(b'}') if self.depth > 1 => {
				self.depth -= 1;
				self.into()
			}

			TokenKind::Char(b'}') => {
				if let Some(mut span) = self.span {
					span.end = token.line;
					symbols.structures.push(span);
				}

				Start.into()
			}

			_ => self.into(),
		}
	}
}


impl From<Structure> for State {
	fn from(state: Structure) -> State {
		State::Structure(state)
	}
}


/// Top level statements.
#[derive(Debug)]
pub(super) struct Start;


impl Start {
	pub fn visit(self, token: &Token) -> State {
		let structure = |kind| -> State { BeforeStructure { kind, line: token.line }.into() };

		match token.kind {
			TokenKind::Keyword(Keyword::Class) => structure(StructureKind::Class),
			TokenKind::Keyword(Keyword::Interface) => structure(StructureKind::Interface),
			TokenKind::Keyword(Keyword::Trait) => structure(StructureKind::Trait),

			TokenKind::Keyword(Keyword::Use) => Import::default().into(),

			TokenKind::Keyword(Keyword::Function) => Structure::ignored().into(),

			TokenKind::Keyword(Keyword::Namespace) => {
				Namespace { name: String::new(), line: token.line }.into()
			}

			TokenKind::Keyword(Keyword::New) => State::New,

			kind if kind.is_member_access() => State::Invoke,

			_ => self.into(),
		}
	}
}


impl From<Start> for State {
	fn from(state: Start) -> State {
		State::Start(state)
	}
}


/// All states in the automata.
#[derive(Debug)]
pub(super) enum State {
	Start(Start),
	Import(Import),
	Alias(Alias),
	Namespace(Namespace),
	/// After `new`, where `class` starts an anonymous class.
	New,
	/// After a member access, where `class` is a name and not a declaration.
	Invoke,
	BeforeStructure(BeforeStructure),
	Structure(Structure),
}


impl Default for State {
	fn default() -> Self {
		Start.into()
	}
}


impl State {
	pub fn visit(self, token: &Token, symbols: &mut FileSymbols) -> State {
		match self {
			State::Start(state) => state.visit(token),
			State::Import(state) => state.visit(token, symbols),
			State::Alias(state) => state.visit(token),
			State::Namespace(state) => state.visit(token, symbols),

			State::New if token.kind.is_trivia() => State::New,
			State::New if token.is_keyword(Keyword::Class) => Structure::ignored().into(),
			State::New => Start.into(),

			State::Invoke if token.kind.is_trivia() => State::Invoke,
			State::Invoke => Start.into(),

			State::BeforeStructure(state) => state.visit(token),
			State::Structure(state) => state.visit(token, symbols),
		}
	}
}
