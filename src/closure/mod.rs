mod automata;
mod descriptor;
mod magic;
mod options;
mod resolve;

use crate::{
	cache::FileCache,
	error::{ClosureRange, Error},
	extract,
	reflection::Reflection,
	syntax::TokenSource,
};
use automata::Scan;
use magic::Magic;
use resolve::Resolver;
pub use descriptor::Descriptor;
pub use options::{Options, TRACK_TAG};


/// Reconstruct the source of a closure, resolving every name against the imports of the
/// defining file, and collect what the closure needs to be rebuilt elsewhere.
///
/// Closures without source, either native or created from a named callable, produce the
/// empty descriptor.
pub fn reconstruct<S, R>(cache: &FileCache<S>, closure: &R, options: &Options) -> Result<Descriptor, Error>
where
	S: TokenSource,
	R: Reflection + ?Sized,
{
	let path = match closure.file_path() {
		Some(path) if !closure.is_from_callable() => path,
		_ => {
			log::debug!("closure has no source: {}", closure.short_name());
			return Ok(Descriptor::default());
		}
	};

	let (start, end) = (closure.start_line(), closure.end_line());
	let range = || ClosureRange { path: path.into(), start, end };

	let record = cache.get(path)?;
	let tokens = extract::closure_tokens(&record.tokens, start, end);

	if tokens.is_empty() {
		return Err(Error::MalformedRange(range()));
	}

	// Native classes still name the scope, even if they have no source.
	let class = closure
		.enclosing_class()
		.map(|class| class.name.trim_start_matches('\\'));
	let namespace = closure.namespace().trim_start_matches('\\');

	let symbols = record.symbols();
	let resolver = Resolver::new(&symbols.table, namespace);
	let magic = Magic::new(path, namespace, class, symbols, (start, end), options);

	let mut scan = Scan::new(resolver, magic);

	automata::run(tokens, &mut scan)
		.map_err(|(line, kind)| Error::malformed(range(), line, kind))?;

	let descriptor = scan.finish(&closure.live_variables());

	log::debug!(
		"reconstructed closure at {}: {} bytes, {} captures",
		range(),
		descriptor.source().len(),
		descriptor.captures().len(),
	);

	Ok(descriptor)
}
