use crate::compiler_diagnostic::*;
use thiserror::Error;

/// Misuse of the type hint table by the code driving it.
/// These never come from the script itself.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TypeHintError {
	#[error("Type hints can only be acquired for local variables, but `{{{0}}}` is not local")]
	NonLocalVariable(String),

	#[error("Attempted to exit the root type hint scope")]
	RootScopeExit,
}

impl ProvidesCompilerDiagnostic for TypeHintError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		use TypeHintError::*;
		let builder = CompilerDiagnosticBuilder::from_error(&self).error_code("sklang::internal");
		match self {
			NonLocalVariable(_) => builder
				.help("This is an internal error. Only variables starting with `_` may be looked up."),
			RootScopeExit => builder
				.help("This is an internal error. Every exited scope must have been entered first."),
		}
		.build()
	}
}
