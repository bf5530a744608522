use crate::syntax::Token;


/// The contiguous run of tokens whose line is within the inclusive line range. Tokens must
/// be in source order.
pub fn closure_tokens(tokens: &[Token], start: u32, end: u32) -> &[Token] {
	let first = tokens.partition_point(|token| token.line < start);
	let last = tokens.partition_point(|token| token.line <= end);

	&tokens[first .. last.max(first)]
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::syntax::TokenKind;


	fn token(text: &str, line: u32) -> Token {
		Token { kind: TokenKind::Identifier, text: text.into(), line }
	}


	#[test]
	fn test_line_range() {
		let tokens = [
			token("a", 1),
			token("b", 2),
			token("c", 2),
			token("d", 3),
			token("e", 5),
		];

		let texts = |slice: &[Token]| -> Vec<String> {
			slice.iter().map(|token| token.text.to_string()).collect()
		};

		assert_eq!(texts(closure_tokens(&tokens, 2, 3)), ["b", "c", "d"]);
		assert_eq!(texts(closure_tokens(&tokens, 3, 4)), ["d"]);
		assert_eq!(texts(closure_tokens(&tokens, 1, 9)), ["a", "b", "c", "d", "e"]);
		assert!(closure_tokens(&tokens, 4, 4).is_empty());
		assert!(closure_tokens(&tokens, 6, 8).is_empty());
		assert!(closure_tokens(&tokens, 3, 2).is_empty());
	}
}
