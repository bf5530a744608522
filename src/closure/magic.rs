use std::{
	path::Path,
	time::{SystemTime, UNIX_EPOCH},
};

use super::Options;
use crate::{
	reflection::CLOSURE_NAME,
	symbols::FileSymbols,
	syntax::MagicConstant,
};


/// Export a string as a single quoted php literal.
pub fn export(value: &str) -> String {
	let mut literal = String::with_capacity(value.len() + 2);

	literal.push('\'');
	for c in value.chars() {
		if c == '\\' || c == '\'' {
			literal.push('\\');
		}
		literal.push(c);
	}
	literal.push('\'');

	literal
}


/// Substitutes magic constants and tracking comments for a single closure.
#[derive(Debug)]
pub struct Magic<'a> {
	path: &'a Path,
	/// Without leading separator.
	namespace: &'a str,
	/// Without leading separator.
	class: Option<&'a str>,
	symbols: &'a FileSymbols,
	start: u32,
	end: u32,
	options: &'a Options,
	/// How many lines were added to the code by tracking blocks.
	line_add: i64,
	/// Computed on first use.
	trait_name: Option<String>,
}


impl<'a> Magic<'a> {
	pub fn new(
		path: &'a Path,
		namespace: &'a str,
		class: Option<&'a str>,
		symbols: &'a FileSymbols,
		(start, end): (u32, u32),
		options: &'a Options,
	) -> Self {
		Self {
			path,
			namespace,
			class,
			symbols,
			start,
			end,
			options,
			line_add: 0,
			trait_name: None,
		}
	}


	/// The replacement for a magic constant at the given line.
	pub fn substitute(&mut self, constant: MagicConstant, line: u32) -> String {
		match constant {
			MagicConstant::Line => {
				let line = i64::from(line) - i64::from(self.start) + 1 + self.line_add;
				line.to_string()
			}

			MagicConstant::File => export(&self.path.to_string_lossy()),

			MagicConstant::Dir => {
				let dir = match self.path.parent() {
					Some(dir) if !dir.as_os_str().is_empty() => dir.to_string_lossy(),
					_ => ".".into(),
				};

				export(&dir)
			}

			MagicConstant::Namespace => export(self.namespace),

			MagicConstant::Class => export(self.class.unwrap_or("")),

			MagicConstant::Function => export(&self.function()),

			MagicConstant::Method => match self.class {
				Some(class) => export(&format!("{}::{}", class, self.function())),
				None => export(&self.function()),
			},

			MagicConstant::Trait => {
				let (symbols, namespace) = (self.symbols, self.namespace);
				let (start, end) = (self.start, self.end);

				self.trait_name
					.get_or_insert_with(
						|| {
							let name = symbols
								.enclosing_trait(start, end)
								.map(|span| qualify(namespace, &span.name))
								.unwrap_or_default();

							export(&name)
						}
					)
					.clone()
			}
		}
	}


	/// The replacement for a comment, if it starts with the tracking tag.
	pub fn track(&mut self, comment: &str) -> Option<String> {
		if !comment.starts_with(&*self.options.track_tag) {
			return None;
		}

		let time = self.options.timestamp.unwrap_or_else(SystemTime::now);
		let seconds = time
			.duration_since(UNIX_EPOCH)
			.map(|duration| duration.as_secs())
			.unwrap_or(0);

		let block = format!(
			"/**\n* Date      : {}\n* Timestamp : {}\n* Line      : {}\n* File      : {}\n*/\n",
			humantime::format_rfc3339_seconds(time),
			seconds,
			self.start,
			export(&self.path.to_string_lossy()),
		);

		self.line_add += newlines(&block) - newlines(comment);

		Some(block)
	}


	fn function(&self) -> String {
		qualify(self.namespace, CLOSURE_NAME)
	}
}


fn qualify(namespace: &str, name: &str) -> String {
	if namespace.is_empty() {
		name.into()
	} else {
		format!("{}\\{}", namespace, name)
	}
}


fn newlines(text: &str) -> i64 {
	text.matches('\n').count() as i64
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_export() {
		assert_eq!(export("plain"), "'plain'");
		assert_eq!(export(r"App\{closure}"), r"'App\\{closure}'");
		assert_eq!(export("it's"), r"'it\'s'");
		assert_eq!(export(""), "''");
	}
}
