mod fmt;


/// Reserved words of the language. Keywords are case insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	Abstract,
	And,
	Array,
	As,
	Break,
	Callable,
	Case,
	Catch,
	Class,
	Clone,
	Const,
	Continue,
	Declare,
	Default,
	Do,
	Echo,
	Else,
	ElseIf,
	Empty,
	EndDeclare,
	EndFor,
	EndForeach,
	EndIf,
	EndSwitch,
	EndWhile,
	Eval,
	Exit,
	Extends,
	Final,
	Finally,
	Fn,
	For,
	Foreach,
	Function,
	Global,
	Goto,
	If,
	Implements,
	Include,
	IncludeOnce,
	InstanceOf,
	InsteadOf,
	Interface,
	Isset,
	List,
	Match,
	Namespace,
	New,
	Or,
	Print,
	Private,
	Protected,
	Public,
	Readonly,
	Require,
	RequireOnce,
	Return,
	Static,
	Switch,
	Throw,
	Trait,
	Try,
	Unset,
	Use,
	Var,
	While,
	Xor,
	Yield,
}


impl Keyword {
	/// Lookup a keyword from a lowercase word.
	pub fn from_lowercase(word: &[u8]) -> Option<Self> {
		let keyword = match word {
			b"abstract" => Self::Abstract,
			b"and" => Self::And,
			b"array" => Self::Array,
			b"as" => Self::As,
			b"break" => Self::Break,
			b"callable" => Self::Callable,
			b"case" => Self::Case,
			b"catch" => Self::Catch,
			b"class" => Self::Class,
			b"clone" => Self::Clone,
			b"const" => Self::Const,
			b"continue" => Self::Continue,
			b"declare" => Self::Declare,
			b"default" => Self::Default,
			b"do" => Self::Do,
			b"echo" => Self::Echo,
			b"else" => Self::Else,
			b"elseif" => Self::ElseIf,
			b"empty" => Self::Empty,
			b"enddeclare" => Self::EndDeclare,
			b"endfor" => Self::EndFor,
			b"endforeach" => Self::EndForeach,
			b"endif" => Self::EndIf,
			b"endswitch" => Self::EndSwitch,
			b"endwhile" => Self::EndWhile,
			b"eval" => Self::Eval,
			b"exit" | b"die" => Self::Exit,
			b"extends" => Self::Extends,
			b"final" => Self::Final,
			b"finally" => Self::Finally,
			b"fn" => Self::Fn,
			b"for" => Self::For,
			b"foreach" => Self::Foreach,
			b"function" => Self::Function,
			b"global" => Self::Global,
			b"goto" => Self::Goto,
			b"if" => Self::If,
			b"implements" => Self::Implements,
			b"include" => Self::Include,
			b"include_once" => Self::IncludeOnce,
			b"instanceof" => Self::InstanceOf,
			b"insteadof" => Self::InsteadOf,
			b"interface" => Self::Interface,
			b"isset" => Self::Isset,
			b"list" => Self::List,
			b"match" => Self::Match,
			b"namespace" => Self::Namespace,
			b"new" => Self::New,
			b"or" => Self::Or,
			b"print" => Self::Print,
			b"private" => Self::Private,
			b"protected" => Self::Protected,
			b"public" => Self::Public,
			b"readonly" => Self::Readonly,
			b"require" => Self::Require,
			b"require_once" => Self::RequireOnce,
			b"return" => Self::Return,
			b"static" => Self::Static,
			b"switch" => Self::Switch,
			b"throw" => Self::Throw,
			b"trait" => Self::Trait,
			b"try" => Self::Try,
			b"unset" => Self::Unset,
			b"use" => Self::Use,
			b"var" => Self::Var,
			b"while" => Self::While,
			b"xor" => Self::Xor,
			b"yield" => Self::Yield,
			_ => return None,
		};

		Some(keyword)
	}
}


/// Compile time constants that depend on where they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagicConstant {
	Line,      // __LINE__
	File,      // __FILE__
	Dir,       // __DIR__
	Namespace, // __NAMESPACE__
	Class,     // __CLASS__
	Function,  // __FUNCTION__
	Method,    // __METHOD__
	Trait,     // __TRAIT__
}


impl MagicConstant {
	/// Lookup a magic constant from a lowercase word.
	pub fn from_lowercase(word: &[u8]) -> Option<Self> {
		match word {
			b"__line__" => Some(Self::Line),
			b"__file__" => Some(Self::File),
			b"__dir__" => Some(Self::Dir),
			b"__namespace__" => Some(Self::Namespace),
			b"__class__" => Some(Self::Class),
			b"__function__" => Some(Self::Function),
			b"__method__" => Some(Self::Method),
			b"__trait__" => Some(Self::Trait),
			_ => None,
		}
	}
}


/// All possible kinds of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	InlineHtml,
	OpenTag,         // <?php
	OpenTagWithEcho, // <?=
	CloseTag,        // ?>

	Whitespace,
	Comment,
	DocComment,

	Identifier,
	Variable,    // $name
	NsSeparator, // \
	Keyword(Keyword),
	Magic(MagicConstant),

	Number,
	/// A quoted string without interpolation.
	ConstantString,
	/// A literal part of an interpolated string.
	EncapsedString,
	/// The name in `${name}`.
	StringVarname,
	CurlyOpen,       // the `{` in `{$`
	DollarOpenCurly, // ${
	StartHeredoc,    // <<<LABEL
	EndHeredoc,      // LABEL

	ObjectOperator,         // ->
	NullsafeObjectOperator, // ?->
	DoubleColon,            // ::
	DoubleArrow,            // =>
	Attribute,              // #[
	/// Any other operator with more than one character.
	Operator,

	/// Single character tokens.
	Char(u8),
}


impl TokenKind {
	/// Whitespace and comments.
	pub fn is_trivia(&self) -> bool {
		matches!(self, Self::Whitespace | Self::Comment | Self::DocComment)
	}


	/// Tokens that start or continue a possibly qualified name.
	pub fn is_name(&self) -> bool {
		matches!(self, Self::Identifier | Self::NsSeparator)
	}


	/// Member access operators: `->`, `?->` and `::`.
	pub fn is_member_access(&self) -> bool {
		matches!(
			self,
			Self::ObjectOperator | Self::NullsafeObjectOperator | Self::DoubleColon
		)
	}


	/// Tokens that open a brace level.
	pub fn is_open_brace(&self) -> bool {
		matches!(self, Self::Char(b'{') | Self::CurlyOpen | Self::DollarOpenCurly)
	}
}


/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	/// The literal text of the token, as written in the source.
	pub text: Box<str>,
	/// The line of the first character of the token.
	pub line: u32,
}


impl Token {
	pub fn is(&self, kind: TokenKind) -> bool {
		self.kind == kind
	}


	pub fn is_keyword(&self, keyword: Keyword) -> bool {
		self.kind == TokenKind::Keyword(keyword)
	}


	pub fn is_char(&self, c: u8) -> bool {
		self.kind == TokenKind::Char(c)
	}
}
