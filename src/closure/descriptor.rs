use std::collections::BTreeSet;

use serde::Serialize;


/// The reconstructed closure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
	pub(super) source: String,
	pub(super) captures: BTreeSet<Box<str>>,
	pub(super) is_static: bool,
	pub(super) is_short: bool,
	pub(super) requires_instance_binding: bool,
	pub(super) requires_scope_binding: bool,
}


impl Descriptor {
	/// The self-contained source code of the closure expression.
	pub fn source(&self) -> &str {
		&self.source
	}


	/// The captured variables, without the dollar sign.
	pub fn captures(&self) -> &BTreeSet<Box<str>> {
		&self.captures
	}


	/// Whether the closure was declared `static`.
	pub fn is_static(&self) -> bool {
		self.is_static
	}


	/// Whether the closure is an arrow function.
	pub fn is_short(&self) -> bool {
		self.is_short
	}


	/// Whether the closure uses `$this`.
	pub fn requires_instance_binding(&self) -> bool {
		self.requires_instance_binding
	}


	/// Whether the closure refers to it's class scope, through `self`, `static` or
	/// `parent`.
	pub fn requires_scope_binding(&self) -> bool {
		self.requires_scope_binding
	}


	/// Whether this is the descriptor of a closure with no source.
	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}
}
