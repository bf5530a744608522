use super::*;

use assert_matches::assert_matches;


macro_rules! token {
	($kind:pat) => {
		Ok(Token { kind: $kind, .. })
	};
}

macro_rules! error {
	($error:pat) => {
		Err(Error { error: $error, .. })
	};
}


fn lex(input: &str) -> Vec<Result<Token, Error>> {
	let cursor = Cursor::from(input.as_bytes());
	Lexer::new(cursor).collect()
}


/// Lex valid input, dropping whitespace tokens.
fn lex_significant(input: &str) -> Vec<Token> {
	lex(input)
		.into_iter()
		.map(|result| result.expect("valid input"))
		.filter(|token| !token.is(TokenKind::Whitespace))
		.collect()
}


fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
	tokens
		.iter()
		.map(|token| (token.kind, &*token.text))
		.collect()
}


/// Check that TokenKind is not too big, because the token list of a file is kept in memory.
#[test]
fn test_token_kind_size() {
	assert_eq!(std::mem::size_of::<TokenKind>(), 2);
}


#[test]
fn test_closure() {
	let input = "<?php\n$x = function () use ($y) { return $y; };";
	let tokens = lex_significant(input);

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php\n"),
			(TokenKind::Variable, "$x"),
			(TokenKind::Char(b'='), "="),
			(TokenKind::Keyword(Keyword::Function), "function"),
			(TokenKind::Char(b'('), "("),
			(TokenKind::Char(b')'), ")"),
			(TokenKind::Keyword(Keyword::Use), "use"),
			(TokenKind::Char(b'('), "("),
			(TokenKind::Variable, "$y"),
			(TokenKind::Char(b')'), ")"),
			(TokenKind::Char(b'{'), "{"),
			(TokenKind::Keyword(Keyword::Return), "return"),
			(TokenKind::Variable, "$y"),
			(TokenKind::Char(b';'), ";"),
			(TokenKind::Char(b'}'), "}"),
			(TokenKind::Char(b';'), ";"),
		]
	);
}


#[test]
fn test_lines() {
	let tokens = lex_significant("<?php\n\n$a\n  = 1;");
	let lines: Vec<u32> = tokens.iter().map(|token| token.line).collect();

	assert_eq!(lines, [1, 3, 4, 4, 4]);
}


#[test]
fn test_lossless() {
	let input = r#"<html><?php /** doc */
namespace Foo\Bar;
use Baz as B; # comment
$f = fn(int $x = 0x1F, ...$rest): ?string => "{$x} and ${y} and $z[0]" . <<<EOT
  heredoc $value->name
  EOT;
// done ?>
trailing"#;

	let text: String = lex(input)
		.into_iter()
		.map(|result| result.expect("valid input").text.into_string())
		.collect();

	assert_eq!(text, input);
}


#[test]
fn test_inline_html() {
	let tokens: Vec<Token> = lex("a<?php $x ?>\nb")
		.into_iter()
		.collect::<Result<_, _>>()
		.expect("valid input");

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::InlineHtml, "a"),
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::Variable, "$x"),
			(TokenKind::Whitespace, " "),
			(TokenKind::CloseTag, "?>\n"),
			(TokenKind::InlineHtml, "b"),
		]
	);
}


#[test]
fn test_names() {
	let tokens = lex_significant(r"<?php namespace\foo(); Foo\Bar::class; $a->class; new \Baz;");

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::Keyword(Keyword::Namespace), "namespace"),
			(TokenKind::NsSeparator, "\\"),
			(TokenKind::Identifier, "foo"),
			(TokenKind::Char(b'('), "("),
			(TokenKind::Char(b')'), ")"),
			(TokenKind::Char(b';'), ";"),
			(TokenKind::Identifier, "Foo"),
			(TokenKind::NsSeparator, "\\"),
			(TokenKind::Identifier, "Bar"),
			(TokenKind::DoubleColon, "::"),
			(TokenKind::Keyword(Keyword::Class), "class"),
			(TokenKind::Char(b';'), ";"),
			(TokenKind::Variable, "$a"),
			(TokenKind::ObjectOperator, "->"),
			(TokenKind::Identifier, "class"),
			(TokenKind::Char(b';'), ";"),
			(TokenKind::Keyword(Keyword::New), "new"),
			(TokenKind::NsSeparator, "\\"),
			(TokenKind::Identifier, "Baz"),
			(TokenKind::Char(b';'), ";"),
		]
	);
}


#[test]
fn test_keyword_before_separator() {
	let tokens = lex_significant(r"<?php return\count($x); new\Foo; if\bar();");

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::Keyword(Keyword::Return), "return"),
			(TokenKind::NsSeparator, "\\"),
			(TokenKind::Identifier, "count"),
			(TokenKind::Char(b'('), "("),
			(TokenKind::Variable, "$x"),
			(TokenKind::Char(b')'), ")"),
			(TokenKind::Char(b';'), ";"),
			(TokenKind::Keyword(Keyword::New), "new"),
			(TokenKind::NsSeparator, "\\"),
			(TokenKind::Identifier, "Foo"),
			(TokenKind::Char(b';'), ";"),
			// Not a keyword that can precede a name, so a namespace segment.
			(TokenKind::Identifier, "if"),
			(TokenKind::NsSeparator, "\\"),
			(TokenKind::Identifier, "bar"),
			(TokenKind::Char(b'('), "("),
			(TokenKind::Char(b')'), ")"),
			(TokenKind::Char(b';'), ";"),
		]
	);
}


#[test]
fn test_case_insensitive_words() {
	let tokens = lex_significant("<?php STATIC Function __LINE__ __Class__");

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::Keyword(Keyword::Static), "STATIC"),
			(TokenKind::Keyword(Keyword::Function), "Function"),
			(TokenKind::Magic(MagicConstant::Line), "__LINE__"),
			(TokenKind::Magic(MagicConstant::Class), "__Class__"),
		]
	);
}


#[test]
fn test_interpolation() {
	let tokens = lex_significant(r#"<?php "a $b {$c->d} ${e}";"#);

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::Char(b'"'), "\""),
			(TokenKind::EncapsedString, "a "),
			(TokenKind::Variable, "$b"),
			(TokenKind::EncapsedString, " "),
			(TokenKind::CurlyOpen, "{"),
			(TokenKind::Variable, "$c"),
			(TokenKind::ObjectOperator, "->"),
			(TokenKind::Identifier, "d"),
			(TokenKind::Char(b'}'), "}"),
			(TokenKind::EncapsedString, " "),
			(TokenKind::DollarOpenCurly, "${"),
			(TokenKind::StringVarname, "e"),
			(TokenKind::Char(b'}'), "}"),
			(TokenKind::Char(b'"'), "\""),
			(TokenKind::Char(b';'), ";"),
		]
	);
}


#[test]
fn test_constant_strings() {
	let tokens = lex_significant(r#"<?php 'it\'s $x' "no \$interpolation""#);

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::ConstantString, r"'it\'s $x'"),
			(TokenKind::ConstantString, r#""no \$interpolation""#),
		]
	);
}


#[test]
fn test_heredoc() {
	let tokens = lex_significant("<?php $x = <<<EOT\n  hi $name\n  EOT;");

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::Variable, "$x"),
			(TokenKind::Char(b'='), "="),
			(TokenKind::StartHeredoc, "<<<EOT\n"),
			(TokenKind::EncapsedString, "  hi "),
			(TokenKind::Variable, "$name"),
			(TokenKind::EncapsedString, "\n"),
			(TokenKind::EndHeredoc, "  EOT"),
			(TokenKind::Char(b';'), ";"),
		]
	);
}


#[test]
fn test_nowdoc() {
	let tokens = lex_significant("<?php <<<'EOT'\n$raw\nEOT\n");

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::StartHeredoc, "<<<'EOT'\n"),
			(TokenKind::EncapsedString, "$raw\n"),
			(TokenKind::EndHeredoc, "EOT"),
		]
	);
}


#[test]
fn test_comments() {
	let tokens = lex_significant("<?php /** doc */ // line\n# hash\n/**/ #[Attr]");

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::DocComment, "/** doc */"),
			(TokenKind::Comment, "// line"),
			(TokenKind::Comment, "# hash"),
			(TokenKind::Comment, "/**/"),
			(TokenKind::Attribute, "#["),
			(TokenKind::Identifier, "Attr"),
			(TokenKind::Char(b']'), "]"),
		]
	);
}


#[test]
fn test_operators() {
	let tokens = lex_significant("<?php $a?->b ?? $c => 1.5e-3 ... ::");

	assert_eq!(
		pairs(&tokens),
		[
			(TokenKind::OpenTag, "<?php "),
			(TokenKind::Variable, "$a"),
			(TokenKind::NullsafeObjectOperator, "?->"),
			(TokenKind::Identifier, "b"),
			(TokenKind::Operator, "??"),
			(TokenKind::Variable, "$c"),
			(TokenKind::DoubleArrow, "=>"),
			(TokenKind::Number, "1.5e-3"),
			(TokenKind::Operator, "..."),
			(TokenKind::DoubleColon, "::"),
		]
	);
}


#[test]
fn test_unexpected() {
	assert_matches!(
		&lex("<?php $a \x01 $b")[..],
		[
			token!(TokenKind::OpenTag),
			token!(TokenKind::Variable),
			token!(TokenKind::Whitespace),
			error!(ErrorKind::Unexpected(1)),
			token!(TokenKind::Whitespace),
			token!(TokenKind::Variable),
		]
	);
}


#[test]
fn test_unterminated() {
	assert_matches!(
		lex("<?php 'abc").last(),
		Some(error!(ErrorKind::UnterminatedString))
	);

	assert_matches!(
		lex("<?php /* abc").last(),
		Some(error!(ErrorKind::UnterminatedComment))
	);

	assert_matches!(
		lex("<?php \"abc $x").last(),
		Some(error!(ErrorKind::UnterminatedString))
	);

	assert_matches!(
		lex("<?php \"abc {$x").last(),
		Some(error!(ErrorKind::UnterminatedInterpolation))
	);

	assert_matches!(
		lex("<?php <<<EOT\nabc").last(),
		Some(error!(ErrorKind::UnterminatedHeredoc(_)))
	);
}
