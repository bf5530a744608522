use std::{
	fmt::{self, Display},
	path::Path,
	sync::{Arc, OnceLock},
};

use fxhash::FxHashMap;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use crate::{
	symbols::FileSymbols,
	syntax::{Files, Token, TokenSource},
	Error,
};


/// A stable identity for a source file, derived from it's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId([u8; 32]);


impl FileId {
	pub fn of(path: &Path) -> Self {
		let digest = Sha256::digest(path.to_string_lossy().as_bytes());
		Self(digest.into())
	}
}


impl Display for FileId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		hex::encode(self.0).fmt(f)
	}
}


/// The cached data of a source file. Files are assumed to not change during the lifetime
/// of the process.
#[derive(Debug)]
pub struct FileRecord {
	pub path: Box<Path>,
	pub id: FileId,
	pub tokens: Box<[Token]>,
	symbols: OnceLock<FileSymbols>,
}


impl FileRecord {
	/// The symbols of the file, collected on first demand.
	pub fn symbols(&self) -> &FileSymbols {
		self.symbols.get_or_init(
			|| {
				log::debug!("collecting symbols for {} ({})", self.path.display(), self.id);
				FileSymbols::build(&self.tokens)
			}
		)
	}
}


/// A process wide cache of file tokens and symbols. Each file is read and tokenized at most
/// once, even under concurrent access.
#[derive(Debug)]
pub struct FileCache<S = Files> {
	source: S,
	files: RwLock<FxHashMap<FileId, Arc<FileRecord>>>,
}


impl Default for FileCache<Files> {
	fn default() -> Self {
		Self::new(Files)
	}
}


impl<S: TokenSource> FileCache<S> {
	pub fn new(source: S) -> Self {
		Self { source, files: RwLock::default() }
	}


	/// Get the record of the given file, reading it if not cached yet. Read failures are
	/// not cached.
	pub fn get(&self, path: &Path) -> Result<Arc<FileRecord>, Error> {
		let id = FileId::of(path);

		if let Some(record) = self.files.read().get(&id) {
			return Ok(record.clone());
		}

		let mut files = self.files.write();

		// Someone else may have populated it while we waited for the lock.
		if let Some(record) = files.get(&id) {
			return Ok(record.clone());
		}

		let tokens = self.source.tokens(path)?;

		log::debug!("cached {} tokens for {} ({})", tokens.len(), path.display(), id);

		let record = Arc::new(
			FileRecord {
				path: path.into(),
				id,
				tokens: tokens.into(),
				symbols: OnceLock::new(),
			}
		);

		files.insert(id, record.clone());

		Ok(record)
	}


	/// The number of cached files.
	pub fn len(&self) -> usize {
		self.files.read().len()
	}


	pub fn is_empty(&self) -> bool {
		self.files.read().is_empty()
	}
}


#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;
	use crate::syntax::Memory;

	use assert_matches::assert_matches;


	/// A token source that counts how many times each file was read.
	struct Counting {
		memory: Memory,
		reads: AtomicUsize,
	}


	impl TokenSource for Counting {
		fn tokens(&self, path: &Path) -> Result<Vec<Token>, Error> {
			self.reads.fetch_add(1, Ordering::SeqCst);
			self.memory.tokens(path)
		}
	}


	fn counting() -> Counting {
		Counting {
			memory: Memory::new()
				.with("a.php", "<?php\nuse Foo\\Bar;\n$f = function () {};\n")
				.with("b.php", "<?php\n$g = fn() => 1;\n"),
			reads: AtomicUsize::new(0),
		}
	}


	#[test]
	fn test_file_id() {
		let id = FileId::of(Path::new("/srv/app/a.php"));

		assert_eq!(id, FileId::of(Path::new("/srv/app/a.php")));
		assert_ne!(id, FileId::of(Path::new("/srv/app/b.php")));
		assert_eq!(id.to_string().len(), 64);
	}


	#[test]
	fn test_read_once() {
		let cache = FileCache::new(counting());

		let first = cache.get(Path::new("a.php")).expect("cached file");
		let second = cache.get(Path::new("a.php")).expect("cached file");
		cache.get(Path::new("b.php")).expect("cached file");

		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(cache.source.reads.load(Ordering::SeqCst), 2);
		assert_eq!(cache.len(), 2);

		assert_eq!(first.symbols().table.class("bar"), Some("\\Foo\\Bar"));
		assert!(std::ptr::eq(first.symbols(), second.symbols()));
	}


	#[test]
	fn test_missing_file() {
		let cache = FileCache::new(counting());

		assert_matches!(cache.get(Path::new("missing.php")), Err(Error::Io { .. }));
		assert!(cache.is_empty());
	}


	#[test]
	fn test_concurrent_access() {
		let cache = FileCache::new(counting());

		std::thread::scope(
			|scope| {
				for _ in 0 .. 8 {
					scope.spawn(
						|| {
							let record = cache.get(Path::new("a.php")).expect("cached file");
							assert!(!record.tokens.is_empty());
							record.symbols();
						}
					);
				}
			}
		);

		assert_eq!(cache.source.reads.load(Ordering::SeqCst), 1);
	}
}
