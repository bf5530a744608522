use std::path::Path;


/// The short name of every closure expression.
pub const CLOSURE_NAME: &str = "{closure}";


/// The class a closure is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIdentity {
	/// The fully qualified class name, with or without a leading separator.
	pub name: Box<str>,
	/// Whether the class is built into the runtime, in which case it has no source.
	pub native: bool,
}


/// What the runtime knows about a closure value.
pub trait Reflection {
	/// The file that defines the closure. None for native closures.
	fn file_path(&self) -> Option<&Path>;

	/// The line where the closure expression starts, 1-based.
	fn start_line(&self) -> u32;

	/// The line where the closure expression ends, inclusive.
	fn end_line(&self) -> u32;

	fn enclosing_class(&self) -> Option<&ClassIdentity>;

	/// The namespace the closure was declared in. Empty for the global namespace.
	fn namespace(&self) -> &str;

	/// The variables captured by the closure at runtime, without the dollar sign.
	fn live_variables(&self) -> Vec<&str>;

	/// The function name. Closures created from a named callable have the name of the
	/// callable.
	fn short_name(&self) -> &str {
		CLOSURE_NAME
	}

	fn is_from_callable(&self) -> bool {
		self.short_name() != CLOSURE_NAME
	}

	/// Whether the closure was created from a class method.
	fn is_class_method(&self) -> bool {
		self.is_from_callable()
			&& self.namespace().is_empty()
			&& self.enclosing_class().is_some()
	}
}


/// A plain record of closure information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureInfo {
	path: Option<Box<Path>>,
	start: u32,
	end: u32,
	class: Option<ClassIdentity>,
	namespace: Box<str>,
	live: Vec<Box<str>>,
	short_name: Box<str>,
}


impl ClosureInfo {
	/// A closure defined in the given file, in the global namespace and with no captured
	/// variables.
	pub fn new<P: Into<Box<Path>>>(path: P, start: u32, end: u32) -> Self {
		Self {
			path: Some(path.into()),
			start,
			end,
			class: None,
			namespace: "".into(),
			live: Vec::new(),
			short_name: CLOSURE_NAME.into(),
		}
	}


	/// A closure with no source code.
	pub fn native() -> Self {
		Self {
			path: None,
			start: 0,
			end: 0,
			class: None,
			namespace: "".into(),
			live: Vec::new(),
			short_name: CLOSURE_NAME.into(),
		}
	}


	pub fn with_class(mut self, name: &str) -> Self {
		self.class = Some(ClassIdentity { name: name.into(), native: false });
		self
	}


	pub fn with_native_class(mut self, name: &str) -> Self {
		self.class = Some(ClassIdentity { name: name.into(), native: true });
		self
	}


	pub fn with_namespace(mut self, namespace: &str) -> Self {
		self.namespace = namespace.into();
		self
	}


	/// Set the captured variables. Names may include the dollar sign.
	pub fn with_live<I, V>(mut self, variables: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: AsRef<str>,
	{
		self.live = variables
			.into_iter()
			.map(|name| name.as_ref().trim_start_matches('$').into())
			.collect();
		self
	}


	pub fn with_short_name(mut self, name: &str) -> Self {
		self.short_name = name.into();
		self
	}
}


impl Reflection for ClosureInfo {
	fn file_path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	fn start_line(&self) -> u32 {
		self.start
	}

	fn end_line(&self) -> u32 {
		self.end
	}

	fn enclosing_class(&self) -> Option<&ClassIdentity> {
		self.class.as_ref()
	}

	fn namespace(&self) -> &str {
		&self.namespace
	}

	fn live_variables(&self) -> Vec<&str> {
		self.live.iter().map(AsRef::as_ref).collect()
	}

	fn short_name(&self) -> &str {
		&self.short_name
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_callable_origin() {
		let closure = ClosureInfo::new(Path::new("a.php"), 1, 1);
		assert!(!closure.is_from_callable());
		assert!(!closure.is_class_method());

		let function = closure.clone().with_short_name("strlen");
		assert!(function.is_from_callable());
		assert!(!function.is_class_method());

		let method = function.clone().with_class("App\\Foo");
		assert!(method.is_class_method());

		let namespaced = method.with_namespace("App");
		assert!(!namespaced.is_class_method());
	}


	#[test]
	fn test_live_variables() {
		let closure = ClosureInfo::native().with_live(["$a", "b"]);
		assert_eq!(closure.live_variables(), ["a", "b"]);
	}
}
