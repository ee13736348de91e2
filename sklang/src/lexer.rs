mod logos_lexer;

use crate::compiler_diagnostic::*;
use crate::SourceSpan;
use std::fmt;
use thiserror::Error;
pub use logos_lexer::LogosLexer;
pub use logos_lexer::LogosLexerContext;

/// Lexer token type
/// In this case, it's defined by the Logos-based lexer implementation.
pub type TokenKind = logos_lexer::TokenKind;

/// Types of lexer errors
#[derive(Copy, Clone, Error, Debug, PartialEq, Eq)]
pub enum LexerErrorKind {
	/// Lexer couldn't match token to any regex
	#[error("Invalid token")]
	InvalidToken,

	/// Text literal without the closing quote
	#[error("Unterminated text")]
	UnterminatedText,

	/// Variable without the closing brace
	#[error("Unterminated variable")]
	UnterminatedVariable,

	/// `{}`
	#[error("Empty variable name")]
	EmptyVariableName,
}

/// Lexer error
#[derive(Copy, Clone, Error, Debug)]
pub struct LexerError {
	pub range: SourceSpan,
	pub kind: LexerErrorKind,
}

impl fmt::Display for LexerError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.kind)
	}
}

impl ProvidesCompilerDiagnostic for LexerError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		use LexerErrorKind::*;
		let builder = CompilerDiagnosticBuilder::from_error(self).error_code("sklang::lexer");
		match self.kind {
			InvalidToken => builder
				.label(self.range, "This character is not allowed here")
				.help("Remove it or put it inside a text literal"),
			UnterminatedText => builder
				.label(self.range, "This text is never closed")
				.help("Add a closing `\"` on the same line. Use `\"\"` for a quote inside text"),
			UnterminatedVariable => builder
				.label(self.range, "This variable is never closed")
				.help("Variables are written as `{name}` on a single line"),
			EmptyVariableName => builder
				.label(self.range, "Variable without a name")
				.help("Give the variable a name, e.g. `{_value}`"),
		}
		.build()
	}
}

/// Script keywords the hint pass cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
	Set,
	To,
}

/// Token as produced by the lexer (token kind + source location)
#[derive(Debug, Copy, Clone)]
pub struct Token {
	/// Type of the token
	pub kind: TokenKind,

	/// Source code location
	pub range: SourceSpan,
}

impl Token {
	/// Source text of the token
	pub fn text<'source>(&self, source: &'source str) -> &'source str {
		&source[self.range.start()..self.range.end()]
	}

	/// Variable name without the surrounding braces
	pub fn variable_name<'source>(&self, source: &'source str) -> Option<&'source str> {
		match self.kind {
			TokenKind::Variable => {
				let text = self.text(source);
				Some(&text[1..text.len() - 1])
			},
			_ => None,
		}
	}
}

/// Abstract lexer
pub trait Lexer<'source> {
	/// Creates a lexer for provided source code
	fn new(source: &'source str) -> Self;

	/// Processes the text and returns a vector of tokens
	fn process(&mut self) -> Result<Vec<Token>, LexerError>;
}
