use std::time::SystemTime;

use log::LevelFilter;


/// The log level for the given number of verbose flags.
pub fn level(verbosity: u64) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}


/// Install the global logger, writing to stderr.
pub fn setup(verbosity: u64) -> Result<(), fern::InitError> {
	fern::Dispatch::new()
		.format(
			|out, message, record| out.finish(
				format_args!(
					"[{} {} {}] {}",
					humantime::format_rfc3339_seconds(SystemTime::now()),
					record.level(),
					record.target(),
					message
				)
			)
		)
		.level(level(verbosity))
		.chain(std::io::stderr())
		.apply()?;

	Ok(())
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_level() {
		assert_eq!(level(0), LevelFilter::Warn);
		assert_eq!(level(2), LevelFilter::Debug);
		assert_eq!(level(7), LevelFilter::Trace);
	}
}
