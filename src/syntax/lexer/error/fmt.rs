use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Unexpected(value) => write!(f, "unexpected {:?}", *value as char)?,

			Self::UnterminatedString => "unterminated string literal".fmt(f)?,

			Self::UnterminatedComment => "unterminated comment".fmt(f)?,

			Self::UnterminatedHeredoc(label) => {
				write!(
					f,
					"unterminated heredoc, expected {}",
					String::from_utf8_lossy(label)
				)?;
			}

			Self::UnterminatedInterpolation => "unterminated string interpolation".fmt(f)?,
		};

		Ok(())
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} - {}.", self.pos, self.error)
	}
}
