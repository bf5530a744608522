use std::{
	fs::File,
	path::Path,
};

use fxhash::FxHashMap;

use super::{lexer::{self, Lexer}, Token};
use crate::Error;


/// Php source code.
#[derive(Debug)]
pub struct Source {
	/// The origin path, may be something fictional like `<stdin>`.
	pub path: Box<Path>,
	/// The source code.
	pub contents: Box<[u8]>,
}


impl Source {
	/// Load the source code from a file path.
	pub fn from_path<P>(path: P) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
	{
		let path = path.into();
		let file = File::open(&path)?;
		Self::from_reader(path, file)
	}


	/// Load the source code from a std::io::Read.
	/// The path argument may be anything, including fictional paths like `<stdin>`.
	pub fn from_reader<P, R>(path: P, mut reader: R) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
		R: std::io::Read,
	{
		let path = path.into();
		let mut contents = Vec::with_capacity(4096); // Expect a few lines.
		reader.read_to_end(&mut contents)?;

		Ok(Self { path, contents: contents.into() })
	}


	/// Split the source code in tokens. Fails on the first lexical error.
	pub fn tokenize(&self) -> Result<Vec<Token>, lexer::Error> {
		let cursor = lexer::Cursor::from(self);
		Lexer::new(cursor).collect()
	}
}


/// Provides the tokens of a given file.
pub trait TokenSource {
	fn tokens(&self, path: &Path) -> Result<Vec<Token>, Error>;
}


/// Reads source files from the file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Files;


impl TokenSource for Files {
	fn tokens(&self, path: &Path) -> Result<Vec<Token>, Error> {
		let source = Source::from_path(path)
			.map_err(|error| Error::io(path, error))?;

		source
			.tokenize()
			.map_err(|error| Error::lexer(path, error))
	}
}


/// In memory source files, keyed by path.
#[derive(Debug, Default)]
pub struct Memory {
	files: FxHashMap<Box<Path>, Box<[u8]>>,
}


impl Memory {
	pub fn new() -> Self {
		Self::default()
	}


	/// Add or replace a file.
	pub fn insert<P, C>(&mut self, path: P, contents: C)
	where
		P: AsRef<Path>,
		C: AsRef<[u8]>,
	{
		self.files.insert(path.as_ref().into(), contents.as_ref().into());
	}


	pub fn with<P, C>(mut self, path: P, contents: C) -> Self
	where
		P: AsRef<Path>,
		C: AsRef<[u8]>,
	{
		self.insert(path, contents);
		self
	}
}


impl TokenSource for Memory {
	fn tokens(&self, path: &Path) -> Result<Vec<Token>, Error> {
		let contents = self
			.files
			.get(path)
			.ok_or_else(
				|| Error::io(path, std::io::ErrorKind::NotFound.into())
			)?;

		let source = Source::from_reader(path, &contents[..])
			.map_err(|error| Error::io(path, error))?;

		source
			.tokenize()
			.map_err(|error| Error::lexer(path, error))
	}
}
