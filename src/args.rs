use std::{ffi::OsString, path::Path};

use clap::{clap_app, crate_authors, crate_version, crate_description, value_t};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The file that defines the closure.
	pub file: Box<Path>,
	/// The first line of the closure.
	pub start: u32,
	/// The last line of the closure.
	pub end: u32,
	/// The enclosing namespace. Inferred from the file if missing.
	pub namespace: Option<Box<str>>,
	/// The class the closure is scoped to.
	pub class: Option<Box<str>>,
	/// Whether the class is built into the runtime.
	pub native: bool,
	/// The variables captured at runtime.
	pub captures: Vec<Box<str>>,
	/// Print the descriptor as json.
	pub json: bool,
	/// How many times verbose output was requested.
	pub verbosity: u64,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		ClosureLift =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg file: +required "The php file that defines the closure")
			(@arg start: -s --start +takes_value +required "The first line of the closure")
			(@arg end: -e --end +takes_value +required "The last line of the closure")
			(@arg namespace: -n --namespace +takes_value "The enclosing namespace")
			(@arg class: -c --class +takes_value "The class the closure is scoped to")
			(@arg native: --native requires[class] "The class is built into the runtime")
			(@arg capture: --capture +takes_value +multiple number_of_values(1)
				"A variable captured by the closure at runtime")
			(@arg json: --json "Print the result as json")
			(@arg verbose: -v +multiple "Log more, may be repeated")
	);

	let matches = match app.get_matches_from_safe(args) {
		Ok(matches) => matches,

		Err(error) => return match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	};

	let file: Box<Path> = matches
		.value_of_os("file")
		.map(|file| Path::new(file).into())
		.ok_or_else(|| clap::Error::argument_not_found_auto("file"))?;

	let captures: Vec<Box<str>> = matches
		.values_of("capture")
		.map(|values| values.map(Into::into).collect())
		.unwrap_or_default();

	Ok(
		Command::Run(
			Args {
				file,
				start: value_t!(matches, "start", u32)?,
				end: value_t!(matches, "end", u32)?,
				namespace: matches.value_of("namespace").map(Into::into),
				class: matches.value_of("class").map(Into::into),
				native: matches.is_present("native"),
				captures,
				json: matches.is_present("json"),
				verbosity: matches.occurrences_of("verbose"),
			}
		)
	)
}


#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;


	#[test]
	fn test_parse_run() {
		let command = parse(
			[
				"closure-lift", "app/routes.php", "--start", "3", "--end", "7",
				"--class", r"App\Kernel", "--capture", "a", "--capture", "$b", "-vv",
			]
		);

		let args = assert_matches!(command, Ok(Command::Run(args)) => args);

		assert_eq!(&*args.file, Path::new("app/routes.php"));
		assert_eq!((args.start, args.end), (3, 7));
		assert_eq!(args.namespace, None);
		assert_eq!(args.class.as_deref(), Some(r"App\Kernel"));
		assert!(!args.native);
		assert_eq!(args.captures, vec![Box::<str>::from("a"), Box::<str>::from("$b")]);
		assert!(!args.json);
		assert_eq!(args.verbosity, 2);
	}


	#[test]
	fn test_parse_errors() {
		assert_matches!(
			parse(["closure-lift", "a.php", "--start", "x", "--end", "2"]),
			Err(_)
		);

		assert_matches!(
			parse(["closure-lift", "a.php", "--start", "1"]),
			Err(_)
		);

		assert_matches!(
			parse(["closure-lift", "a.php", "-s", "1", "-e", "1", "--native"]),
			Err(_)
		);

		assert_matches!(parse(["closure-lift", "--help"]), Ok(Command::Help(_)));
	}
}
