use std::fmt::{self, Display};

use super::{Keyword, MagicConstant, Token, TokenKind};


impl Display for MagicConstant {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Line => "__LINE__",
			Self::File => "__FILE__",
			Self::Dir => "__DIR__",
			Self::Namespace => "__NAMESPACE__",
			Self::Class => "__CLASS__",
			Self::Function => "__FUNCTION__",
			Self::Method => "__METHOD__",
			Self::Trait => "__TRAIT__",
		}
		.fmt(f)
	}
}


impl Display for Keyword {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		// Keywords are displayed in lowercase, regardless of how they were written.
		let debug = format!("{:?}", self);
		debug.to_ascii_lowercase().fmt(f)
	}
}


impl Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::InlineHtml => "inline html".fmt(f),
			Self::OpenTag | Self::OpenTagWithEcho => "open tag".fmt(f),
			Self::CloseTag => "close tag".fmt(f),
			Self::Whitespace => "whitespace".fmt(f),
			Self::Comment => "comment".fmt(f),
			Self::DocComment => "doc comment".fmt(f),
			Self::Identifier => "identifier".fmt(f),
			Self::Variable => "variable".fmt(f),
			Self::NsSeparator => "'\\'".fmt(f),
			Self::Keyword(keyword) => write!(f, "keyword '{}'", keyword),
			Self::Magic(magic) => magic.fmt(f),
			Self::Number => "number".fmt(f),
			Self::ConstantString | Self::EncapsedString => "string".fmt(f),
			Self::StringVarname => "variable name".fmt(f),
			Self::CurlyOpen => "'{$'".fmt(f),
			Self::DollarOpenCurly => "'${'".fmt(f),
			Self::StartHeredoc => "heredoc start".fmt(f),
			Self::EndHeredoc => "heredoc end".fmt(f),
			Self::ObjectOperator => "'->'".fmt(f),
			Self::NullsafeObjectOperator => "'?->'".fmt(f),
			Self::DoubleColon => "'::'".fmt(f),
			Self::DoubleArrow => "'=>'".fmt(f),
			Self::Attribute => "'#['".fmt(f),
			Self::Operator => "operator".fmt(f),
			Self::Char(c) => write!(f, "'{}'", *c as char),
		}
	}
}


impl Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} {:?} at line {}", self.kind, self.text, self.line)
	}
}
