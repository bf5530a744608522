use super::TokenKind;


/// Operators with more than one character. Longer operators must come first, so that the
/// longest match wins.
const OPERATORS: &[(&[u8], TokenKind)] = &[
	(b"<<=", TokenKind::Operator),
	(b">>=", TokenKind::Operator),
	(b"**=", TokenKind::Operator),
	(b"...", TokenKind::Operator),
	(b"<=>", TokenKind::Operator),
	(b"===", TokenKind::Operator),
	(b"!==", TokenKind::Operator),
	(b"??=", TokenKind::Operator),
	(b"?->", TokenKind::NullsafeObjectOperator),
	(b"->", TokenKind::ObjectOperator),
	(b"=>", TokenKind::DoubleArrow),
	(b"::", TokenKind::DoubleColon),
	(b"++", TokenKind::Operator),
	(b"--", TokenKind::Operator),
	(b"==", TokenKind::Operator),
	(b"!=", TokenKind::Operator),
	(b"<>", TokenKind::Operator),
	(b"<=", TokenKind::Operator),
	(b">=", TokenKind::Operator),
	(b"&&", TokenKind::Operator),
	(b"||", TokenKind::Operator),
	(b"??", TokenKind::Operator),
	(b"+=", TokenKind::Operator),
	(b"-=", TokenKind::Operator),
	(b"*=", TokenKind::Operator),
	(b"/=", TokenKind::Operator),
	(b".=", TokenKind::Operator),
	(b"%=", TokenKind::Operator),
	(b"&=", TokenKind::Operator),
	(b"|=", TokenKind::Operator),
	(b"^=", TokenKind::Operator),
	(b"<<", TokenKind::Operator),
	(b">>", TokenKind::Operator),
	(b"**", TokenKind::Operator),
];


/// Get the length and kind of the symbol at the start of the input. Anything that isn't a
/// multi character operator is a single character token.
pub(super) fn operator(input: &[u8], first: u8) -> (usize, TokenKind) {
	OPERATORS
		.iter()
		.find(|(operator, _)| input.starts_with(operator))
		.map(|&(operator, kind)| (operator.len(), kind))
		.unwrap_or((1, TokenKind::Char(first)))
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_longest_match() {
		assert_eq!(operator(b"?->name", b'?'), (3, TokenKind::NullsafeObjectOperator));
		assert_eq!(operator(b"??= 1", b'?'), (3, TokenKind::Operator));
		assert_eq!(operator(b"?? 1", b'?'), (2, TokenKind::Operator));
		assert_eq!(operator(b"? 1", b'?'), (1, TokenKind::Char(b'?')));
		assert_eq!(operator(b"=> $x", b'='), (2, TokenKind::DoubleArrow));
		assert_eq!(operator(b"::class", b':'), (2, TokenKind::DoubleColon));
		assert_eq!(operator(b": int", b':'), (1, TokenKind::Char(b':')));
	}
}
