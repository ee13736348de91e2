use super::{KeywordKind, Lexer, LexerError, LexerErrorKind, SourceSpan, Token};
use logos::{Logos, Skip};

/// Length of the rest of the current line
fn line_remainder_len(lex: &logos::Lexer<TokenKind>) -> usize {
	match lex.remainder().find('\n') {
		Some(offset) => offset,
		None => lex.remainder().len(),
	}
}

/// Records an error spanning from the current token to the end of the line
fn fail_until_line_end(lex: &mut logos::Lexer<TokenKind>, kind: LexerErrorKind) -> bool {
	let span = lex.span();
	let range = SourceSpan::new(span.start, span.end - span.start + line_remainder_len(lex));
	lex.extras.last_err = Some(LexerError { range, kind });
	false
}

/// Consumes a text literal. Two quotes in a row stand for a single quote.
fn consume_text(lex: &mut logos::Lexer<TokenKind>) -> bool {
	let bytes = lex.remainder().as_bytes();
	let mut offset = 0;
	while offset < bytes.len() {
		match bytes[offset] {
			b'"' if bytes.get(offset + 1) == Some(&b'"') => offset += 2,
			b'"' => {
				lex.bump(offset + 1);
				return true;
			},
			b'\n' => break,
			_ => offset += 1,
		}
	}
	fail_until_line_end(lex, LexerErrorKind::UnterminatedText)
}

/// Consumes a variable. Braces may nest, e.g. `{_list::%{_index}%}`.
fn consume_variable(lex: &mut logos::Lexer<TokenKind>) -> bool {
	let mut depth = 1usize;
	for (offset, c) in lex.remainder().char_indices() {
		match c {
			'{' => depth += 1,
			'}' => {
				depth -= 1;
				if depth == 0 {
					if offset == 0 {
						lex.bump(1);
						let span = lex.span();
						lex.extras.last_err = Some(LexerError {
							range: SourceSpan::new_from_range(&span),
							kind: LexerErrorKind::EmptyVariableName,
						});
						return false;
					}
					lex.bump(offset + 1);
					return true;
				}
			},
			'\n' => break,
			_ => {},
		}
	}
	fail_until_line_end(lex, LexerErrorKind::UnterminatedVariable)
}

/// Causes lexer to consume and ignore comments (#) up to the end of the line
fn consume_line_comment(lex: &mut logos::Lexer<TokenKind>) -> Skip {
	let length = line_remainder_len(lex);
	lex.bump(length);
	Skip
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = LogosLexerContext)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
	#[token("#", consume_line_comment)]
	Ignored,

	#[token("\n")]
	Newline,

	#[token("true", |_| true)]
	#[token("yes", |_| true)]
	#[token("false", |_| false)]
	#[token("no", |_| false)]
	Boolean(bool),

	#[regex(r"[0-9]+(\.[0-9]+)?")]
	Number,

	#[token("\"", consume_text)]
	Text,

	#[token("{", consume_variable)]
	Variable,

	#[token("set", |_| KeywordKind::Set)]
	#[token("to",  |_| KeywordKind::To)]
	Keyword(KeywordKind),

	#[regex(r"[a-zA-Z_][a-zA-Z0-9_']*")]
	Word,

	#[token(":")]
	Colon,

	#[regex(r##"[^\sa-zA-Z0-9_{}"#:]"##)]
	Symbol,
}

/// Additional data accessed by the token callbacks
///
/// This struct is not contained in LogosLexer, but is
/// passed as an extra to logos::Lexer and hence owned
/// by it.
#[derive(Default)]
pub struct LogosLexerContext {
	/// Last lexing error (written by custom token parsing functions)
	pub last_err: Option<LexerError>,
}

/// Logos-based lexer implementation
pub struct LogosLexer<'source> {
	lexer: logos::Lexer<'source, TokenKind>,
}

/// Lexer implementation based on logos <3
impl<'source> Lexer<'source> for LogosLexer<'source> {
	/// Creates a new lexer given a source code string
	fn new(source: &'source str) -> Self {
		LogosLexer {
			lexer: TokenKind::lexer_with_extras(source, LogosLexerContext::default()),
		}
	}

	/// Processes the string and produces a vector of tokens
	fn process(&mut self) -> Result<Vec<Token>, LexerError> {
		let mut tokens = Vec::<Token>::with_capacity(self.lexer.source().len() / 4);

		while let Some(token_result) = self.lexer.next() {
			match token_result {
				Ok(token_kind) => tokens.push(Token {
					kind: token_kind,
					range: SourceSpan::new_from_range(&self.lexer.span()),
				}),
				Err(_) => {
					return Err(self.lexer.extras.last_err.take().unwrap_or(LexerError {
						kind: LexerErrorKind::InvalidToken,
						range: SourceSpan::new_from_range(&self.lexer.span()),
					}));
				},
			}
		}

		Ok(tokens)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn kinds(source: &str) -> Vec<TokenKind> {
		LogosLexer::new(source)
			.process()
			.expect("tokens expected")
			.into_iter()
			.map(|t| t.kind)
			.collect()
	}

	#[test]
	fn set_statement() {
		use TokenKind::*;
		assert_eq!(
			kinds("set {_x} to 5"),
			vec![Keyword(KeywordKind::Set), Variable, Keyword(KeywordKind::To), Number]
		);
	}

	#[test]
	fn comments_keep_newlines() {
		use TokenKind::*;
		assert_eq!(kinds("on load: # comment\n\tstop"), vec![Word, Word, Colon, Newline, Word]);
	}

	#[test]
	fn nested_variable_is_one_token() {
		let source = "{_list::%{_i}%}";
		let tokens = LogosLexer::new(source).process().unwrap();
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].variable_name(source), Some("_list::%{_i}%"));
	}

	#[test]
	fn escaped_quote_stays_in_text() {
		let source = r#"send "say ""hi""" to player"#;
		let tokens = LogosLexer::new(source).process().unwrap();
		assert_eq!(tokens[1].kind, TokenKind::Text);
		assert_eq!(tokens[1].text(source), r#""say ""hi""""#);
		assert_eq!(tokens.len(), 4);
	}

	#[rstest]
	#[case("set {_x to 1", LexerErrorKind::UnterminatedVariable)]
	#[case("set {_x} to \"abc", LexerErrorKind::UnterminatedText)]
	#[case("set {} to 1", LexerErrorKind::EmptyVariableName)]
	#[case("set {_x} to 1 }", LexerErrorKind::InvalidToken)]
	fn lexer_errors(#[case] source: &str, #[case] expected: LexerErrorKind) {
		let err = LogosLexer::new(source).process().unwrap_err();
		assert_eq!(err.kind, expected);
	}

	#[test]
	fn unterminated_text_stops_at_line_end() {
		let source = "set {_x} to \"abc\nset {_y} to 2";
		let err = LogosLexer::new(source).process().unwrap_err();
		assert_eq!(err.range, SourceSpan::new_between(12, 16));
	}
}
