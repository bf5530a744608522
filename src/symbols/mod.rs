mod automata;

use fxhash::FxHashMap;
use serde::Serialize;

use crate::syntax::Token;
use automata::State;


/// The kind of a named structure declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
	Class,
	Interface,
	Trait,
}


/// A named class, interface or trait declaration, and the lines it spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSpan {
	pub kind: StructureKind,
	pub name: Box<str>,
	pub start: u32,
	/// The line of the closing brace.
	pub end: u32,
}


impl StructureSpan {
	/// Whether the span contains the given line range.
	pub fn contains(&self, start: u32, end: u32) -> bool {
		self.start <= start && self.end >= end
	}
}


/// A namespace declaration. The namespace lasts until the next declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceSpan {
	/// The namespace name, without a leading separator. Empty for the global namespace.
	pub name: Box<str>,
	pub line: u32,
}


/// The aliases introduced by the imports of a file. Every target is fully qualified,
/// starting with the namespace separator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
	/// Keyed by lowercase alias.
	classes: FxHashMap<Box<str>, Box<str>>,
	/// Keyed by lowercase alias.
	functions: FxHashMap<Box<str>, Box<str>>,
	/// Keyed by alias, as constants are case sensitive.
	constants: FxHashMap<Box<str>, Box<str>>,
}


impl SymbolTable {
	pub fn class(&self, alias: &str) -> Option<&str> {
		self.classes
			.get(alias.to_ascii_lowercase().as_str())
			.map(AsRef::as_ref)
	}


	pub fn function(&self, alias: &str) -> Option<&str> {
		self.functions
			.get(alias.to_ascii_lowercase().as_str())
			.map(AsRef::as_ref)
	}


	pub fn constant(&self, alias: &str) -> Option<&str> {
		self.constants.get(alias).map(AsRef::as_ref)
	}


	pub fn is_empty(&self) -> bool {
		self.classes.is_empty() && self.functions.is_empty() && self.constants.is_empty()
	}


	fn insert(&mut self, kind: automata::ImportKind, alias: &str, target: Box<str>) {
		use automata::ImportKind;

		match kind {
			ImportKind::Class => self.classes.insert(alias.to_ascii_lowercase().into(), target),
			ImportKind::Function => self.functions.insert(alias.to_ascii_lowercase().into(), target),
			ImportKind::Constant => self.constants.insert(alias.into(), target),
		};
	}
}


/// Everything collected from a single pass over the tokens of a file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileSymbols {
	pub table: SymbolTable,
	/// In declaration order.
	pub structures: Vec<StructureSpan>,
	/// In declaration order.
	pub namespaces: Vec<NamespaceSpan>,
}


impl FileSymbols {
	/// Collect the symbols from the tokens of a file.
	pub fn build(tokens: &[Token]) -> Self {
		let mut symbols = Self::default();
		let mut state = State::default();

		for token in tokens {
			state = state.visit(token, &mut symbols);
		}

		log::trace!(
			"collected {} structures and {} namespaces",
			symbols.structures.len(),
			symbols.namespaces.len()
		);

		symbols
	}


	/// The trait that contains the given line range, if any.
	pub fn enclosing_trait(&self, start: u32, end: u32) -> Option<&StructureSpan> {
		self.structures
			.iter()
			.find(|span| span.kind == StructureKind::Trait && span.contains(start, end))
	}


	/// The namespace in effect at the given line.
	pub fn namespace_at(&self, line: u32) -> &str {
		self.namespaces
			.iter()
			.take_while(|span| span.line <= line)
			.last()
			.map_or("", |span| &*span.name)
	}
}
