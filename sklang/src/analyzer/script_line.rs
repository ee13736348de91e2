use super::{ScriptError, ScriptErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::SourceSpan;

/// A non-empty line of tokens
#[derive(Debug, Clone, Copy)]
pub struct ScriptLine<'t> {
	/// 1-based line number
	pub number: usize,

	/// Whitespace before the first token
	pub indent: SourceSpan,

	/// Never empty, never contains newlines
	pub tokens: &'t [Token],
}

impl<'t> ScriptLine<'t> {
	/// Section headers end with a colon
	pub fn opens_section(&self) -> bool {
		matches!(self.tokens.last(), Some(Token { kind: TokenKind::Colon, .. }))
	}

	/// Span of the whole line without indentation
	pub fn span(&self) -> SourceSpan {
		match (self.tokens.first(), self.tokens.last()) {
			(Some(first), Some(last)) => first.range.merge(&last.range),
			_ => self.indent,
		}
	}

	/// Width of the indentation in characters
	pub fn indent_width(&self, source: &str) -> Result<usize, ScriptError> {
		let indent = &source[self.indent.start()..self.indent.end()];
		if indent.contains(' ') && indent.contains('\t') {
			return Err(ScriptError::new(ScriptErrorKind::MixedIndentation, self.indent));
		}
		Ok(indent.chars().count())
	}

	/// Character the line is indented with, `None` for top level lines
	pub fn indent_style(&self, source: &str) -> Option<char> {
		source[self.indent.start()..self.indent.end()].chars().next()
	}
}

/// Groups tokens into lines, skipping the ones without tokens
pub fn split_lines(tokens: &[Token]) -> Vec<ScriptLine<'_>> {
	let mut lines = Vec::new();
	let mut number = 1;
	let mut line_offset = 0;
	let mut first = 0;

	for (index, token) in tokens.iter().enumerate() {
		if token.kind != TokenKind::Newline {
			continue;
		}
		if index > first {
			lines.push(make_line(number, line_offset, &tokens[first..index]));
		}
		number += 1;
		line_offset = token.range.end();
		first = index + 1;
	}

	if tokens.len() > first {
		lines.push(make_line(number, line_offset, &tokens[first..]));
	}
	lines
}

fn make_line(number: usize, line_offset: usize, tokens: &[Token]) -> ScriptLine<'_> {
	ScriptLine {
		number,
		indent: SourceSpan::new_between(line_offset, tokens[0].range.start()),
		tokens,
	}
}
