pub mod util;

use std::{io, path::Path};

use crate::{
	cache::FileCache,
	closure::{self, Descriptor, Options},
	reflection::ClosureInfo,
	syntax::Memory,
	Error,
};


/// Reconstruct the single closure in each file of the directory, using the whole file as
/// the closure range.
fn test_dir<P, F>(path: P, mut check: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, Result<Descriptor, Error>),
{
	util::test_dir(
		path,
		move |path, contents| {
			let end = contents.lines().count() as u32;
			let cache = FileCache::new(Memory::new().with(path, &contents));

			let namespace = match cache.get(path) {
				Ok(record) => record.symbols().namespace_at(end).to_owned(),
				Err(error) => panic!("{}", error),
			};

			let closure = ClosureInfo::new(path, 1, end).with_namespace(&namespace);

			check(path, closure::reconstruct(&cache, &closure, &Options::default()));

			Ok(())
		}
	)
}


/// Reconstructing an already reconstructed closure must produce the same source.
fn check_fixpoint(path: &Path, descriptor: &Descriptor) {
	let contents = format!("<?php\n$closure = {};\n", descriptor.source());
	let end = 2 + descriptor.source().matches('\n').count() as u32;

	let cache = FileCache::new(Memory::new().with(path, &contents));
	let closure = ClosureInfo::new(path, 2, end);

	match closure::reconstruct(&cache, &closure, &Options::default()) {
		Ok(again) => assert_eq!(
			again.source(),
			descriptor.source(),
			"File {}: reconstruction is not stable",
			path.display()
		),

		Err(error) => panic!("File {}: {}", path.display(), error),
	}
}


#[test]
fn test_positive() -> io::Result<()> {
	test_dir(
		"src/tests/data/positive",
		|path, result| match result {
			Ok(descriptor) => {
				assert!(!descriptor.source().is_empty(), "File {}: empty source", path.display());
				check_fixpoint(path, &descriptor);
			}

			Err(error) => panic!("File {}: {}", path.display(), error),
		}
	)
}


#[test]
fn test_negative() -> io::Result<()> {
	test_dir(
		"src/tests/data/negative",
		|path, result| {
			if let Ok(descriptor) = result {
				panic!("File {}: expected failure, got {:#?}", path.display(), descriptor)
			}
		}
	)
}
