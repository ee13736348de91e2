use crate::lexer::{Token, TokenKind};
use crate::SourceSpan;

/// Prefix marking a variable as local to the trigger it is used in
pub const LOCAL_VARIABLE_TOKEN: &str = "_";

/// Checks whether a variable name (without braces) denotes a local variable
pub fn is_local(name: &str) -> bool {
	name.starts_with(LOCAL_VARIABLE_TOKEN)
}

/// Name of the variable written at `span`, without the braces
pub fn name_at(source: &str, span: SourceSpan) -> &str {
	&source[span.start() + 1..span.end() - 1]
}

/// Every variable a token uses: the variable itself and the ones
/// interpolated with `%...%` inside it, outermost first.
pub fn variable_uses(source: &str, token: &Token) -> Vec<SourceSpan> {
	let mut uses = Vec::new();
	match token.kind {
		TokenKind::Variable => collect_uses(source, token.range, &mut uses),
		TokenKind::Text => {
			for span in interpolated_variables(token.text(source), token.range.start()) {
				collect_uses(source, span, &mut uses);
			}
		},
		_ => {},
	}
	uses
}

fn collect_uses(source: &str, span: SourceSpan, uses: &mut Vec<SourceSpan>) {
	uses.push(span);
	let inner_start = span.start() + 1;
	for nested in interpolated_variables(name_at(source, span), inner_start) {
		collect_uses(source, nested, uses);
	}
}

/// Finds `{...}` variables between percent signs. `text` starts at `offset`
/// in the script.
fn interpolated_variables(text: &str, offset: usize) -> Vec<SourceSpan> {
	let mut found = Vec::new();
	let mut interpolating = false;
	let mut depth = 0usize;
	let mut start = 0;

	for (index, c) in text.char_indices() {
		match c {
			'%' if depth == 0 => interpolating = !interpolating,
			'{' if interpolating => {
				if depth == 0 {
					start = index;
				}
				depth += 1;
			},
			'}' if depth > 0 => {
				depth -= 1;
				if depth == 0 {
					found.push(SourceSpan::new_between(offset + start, offset + index + 1));
				}
			},
			_ => {},
		}
	}
	found
}
