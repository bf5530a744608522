use crate::symbols::SymbolTable;


/// Type names that are never qualified.
const BUILTIN_TYPES: &[&str] = &[
	"string", "int", "float", "bool", "void", "array", "object", "callable", "iterable",
	"mixed", "never", "null", "false", "true",
];


/// Names that refer to the class scope of the closure.
const SCOPE_KEYWORDS: &[&str] = &["self", "static", "parent"];


/// Whether the name is already absolute. Names starting with the separator are fully
/// qualified, and empty names come from a `namespace\` relative name, which is expanded in
/// place.
pub fn is_absolute(name: &str) -> bool {
	name.is_empty() || name.starts_with('\\')
}


pub fn is_builtin_type(name: &str) -> bool {
	BUILTIN_TYPES
		.iter()
		.any(|builtin| builtin.eq_ignore_ascii_case(name))
}


pub fn is_scope_keyword(name: &str) -> bool {
	SCOPE_KEYWORDS
		.iter()
		.any(|keyword| keyword.eq_ignore_ascii_case(name))
}


/// Resolves the first segment of names against the imports of the defining file and the
/// enclosing namespace.
#[derive(Debug)]
pub struct Resolver<'a> {
	table: &'a SymbolTable,
	/// The enclosing namespace with a leading separator, or empty for the global namespace.
	prefix: String,
}


impl<'a> Resolver<'a> {
	pub fn new(table: &'a SymbolTable, namespace: &str) -> Self {
		let prefix = if namespace.is_empty() {
			String::new()
		} else {
			format!("\\{}", namespace)
		};

		Self { table, prefix }
	}


	/// The enclosing namespace with a leading separator, or empty for the global
	/// namespace.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}


	/// Resolve a class name. Unless imported, relative names are resolved in the enclosing
	/// namespace.
	pub fn class_name(&self, name: &str) -> String {
		if is_absolute(name) {
			return name.into();
		}

		match self.table.class(name) {
			Some(target) => target.into(),
			None => format!("{}\\{}", self.prefix, name),
		}
	}


	/// Resolve a function name. Unless imported, the name is left unqualified, as php
	/// falls back to the global function at runtime.
	pub fn function_name(&self, name: &str) -> String {
		if is_absolute(name) {
			return name.into();
		}

		self.table
			.function(name)
			.unwrap_or(name)
			.into()
	}


	/// Resolve a constant name. Unless imported, the name is left unqualified.
	pub fn constant_name(&self, name: &str) -> String {
		if is_absolute(name) {
			return name.into();
		}

		self.table
			.constant(name)
			.unwrap_or(name)
			.into()
	}
}
