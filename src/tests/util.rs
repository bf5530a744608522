use std::{
	io,
	fs,
	path::{Path, PathBuf},
};


/// Run the test for every php file under the given directory, relative to the crate root.
/// Files are visited in path order. An empty directory is an error, as it most likely
/// means a wrong path.
pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, String) -> io::Result<()>,
{
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push(path);

	fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
		for entry in fs::read_dir(dir)? {
			let path = entry?.path();

			if path.is_dir() {
				collect(&path, files)?;
			} else if path.extension().map_or(false, |ext| ext == "php") {
				files.push(path);
			}
		}

		Ok(())
	}

	let mut files = Vec::new();
	collect(&dir, &mut files)?;
	files.sort();

	if files.is_empty() {
		return Err(
			io::Error::new(
				io::ErrorKind::NotFound,
				format!("no php files in {}", dir.display())
			)
		);
	}

	for path in files {
		let contents = fs::read_to_string(&path)?;
		test(&path, contents)?;
	}

	Ok(())
}
