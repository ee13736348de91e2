use crate::compiler_diagnostic::*;
use crate::SourceSpan;
use std::fmt;
use thiserror::Error;

/// Problems with the section structure of a script
#[derive(Copy, Clone, Error, Debug, PartialEq, Eq)]
pub enum ScriptErrorKind {
	#[error("Unexpected indentation")]
	UnexpectedIndentation,

	#[error("Indentation does not match any enclosing section")]
	InconsistentDedent,

	#[error("Indentation mixes tabs and spaces")]
	MixedIndentation,
}

#[derive(Copy, Clone, Error, Debug, PartialEq, Eq)]
pub struct ScriptError {
	pub range: SourceSpan,
	pub kind: ScriptErrorKind,
}

impl ScriptError {
	pub fn new(kind: ScriptErrorKind, range: SourceSpan) -> Self {
		Self { range, kind }
	}
}

impl fmt::Display for ScriptError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.kind)
	}
}

impl ProvidesCompilerDiagnostic for ScriptError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		use ScriptErrorKind::*;
		let builder = CompilerDiagnosticBuilder::from_error(self).error_code("sklang::structure");
		match self.kind {
			UnexpectedIndentation => builder
				.label(self.range, "This line is indented deeper than the previous one")
				.help("Only lines following a section header ending with `:` may be indented deeper."),
			InconsistentDedent => builder
				.label(self.range, "This indentation belongs to no open section")
				.help("Align the line with the section it belongs to."),
			MixedIndentation => builder
				.label(self.range, "Both tabs and spaces used here")
				.help("Indent with either tabs or spaces."),
		}
		.build()
	}
}

/// Warning emitted for a section header with nothing indented below it
pub fn empty_section_warning(header: SourceSpan) -> CompilerDiagnostic {
	CompilerDiagnosticBuilder::new_warning("Empty section")
		.error_code("sklang::structure")
		.label(header, "Nothing is indented below this header")
		.help("Indent the section body or remove the trailing `:`.")
		.build()
}
