mod args;
mod logger;
mod term;

use std::io::Write;

use closure_lift::{
	cache::FileCache,
	closure::{self, Descriptor, Options},
	reflection::ClosureInfo,
	Error,
};
use term::color;

use args::{Args, Command};


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(()) => 0,
		Err(error) => {
			eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
			2
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> Result<(), Error> {
	if let Err(error) = logger::setup(args.verbosity) {
		eprintln!("{}: {}", color::Fg(color::Yellow, "Warning"), error);
	}

	let cache = FileCache::default();

	let namespace = match &args.namespace {
		Some(namespace) => namespace.to_string(),
		None => cache
			.get(&args.file)?
			.symbols()
			.namespace_at(args.start)
			.to_owned(),
	};

	let mut closure = ClosureInfo::new(&*args.file, args.start, args.end)
		.with_namespace(&namespace)
		.with_live(&args.captures);

	if let Some(class) = &args.class {
		closure = if args.native {
			closure.with_native_class(class)
		} else {
			closure.with_class(class)
		};
	}

	let descriptor = closure::reconstruct(&cache, &closure, &Options::default())?;

	let stdout = std::io::stdout();
	let mut stdout = stdout.lock();

	let written = if args.json {
		serde_json::to_writer_pretty(&mut stdout, &descriptor)
			.map_err(Into::into)
			.and_then(|()| writeln!(stdout))
	} else {
		print(&mut stdout, &descriptor)
	};

	written.map_err(|error| Error::io(std::path::Path::new("<stdout>"), error))
}


fn print<W: Write>(out: &mut W, descriptor: &Descriptor) -> std::io::Result<()> {
	let captures: Vec<&str> = descriptor
		.captures()
		.iter()
		.map(|name| &**name)
		.collect();

	writeln!(out, "{}", descriptor.source())?;
	writeln!(out, "{}", color::Fg(color::Cyan, "--------------------------------------------------"))?;
	writeln!(out, "{}: {}", color::Fg(color::Yellow, "captures"), captures.join(", "))?;
	writeln!(out, "{}: {}", color::Fg(color::Yellow, "static"), color::Flag(descriptor.is_static()))?;
	writeln!(out, "{}: {}", color::Fg(color::Yellow, "short"), color::Flag(descriptor.is_short()))?;
	writeln!(
		out,
		"{}: {}",
		color::Fg(color::Yellow, "binds $this"),
		color::Flag(descriptor.requires_instance_binding())
	)?;
	writeln!(
		out,
		"{}: {}",
		color::Fg(color::Yellow, "binds scope"),
		color::Flag(descriptor.requires_scope_binding())
	)
}
