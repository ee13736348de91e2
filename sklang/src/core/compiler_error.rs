use crate::analyzer::{ScriptError, TypeHintError};
use crate::compiler_diagnostic::*;
use crate::lexer::LexerError;
use thiserror::Error;

/// General error of the script tooling
///
/// Includes errors from all stages of script analysis
#[derive(Debug, Error)]
pub enum CompilerError {
	#[error(transparent)]
	LexerError(#[from] LexerError),

	#[error(transparent)]
	ScriptError(#[from] ScriptError),

	#[error(transparent)]
	TypeHintError(#[from] TypeHintError),

	#[error(transparent)]
	IoError(#[from] std::io::Error),

	#[error("File not found")]
	FileNotFound(String),

	#[error(transparent)]
	JsonError(#[from] serde_json::Error),
}

impl ProvidesCompilerDiagnostic for CompilerError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		use CompilerError::*;
		match self {
			LexerError(lexer_error) => lexer_error.to_diagnostic(),

			ScriptError(script_error) => script_error.to_diagnostic(),

			TypeHintError(hint_error) => hint_error.to_diagnostic(),

			IoError(ref io_error) => CompilerDiagnosticBuilder::from_error(&self)
				.help(&io_error.to_string())
				.build(),
			JsonError(serde_error) => CompilerDiagnosticBuilder::from_error(&self)
				.help(&serde_error.to_string())
				.build(),
			FileNotFound(file_name) => CompilerDiagnosticBuilder::from_error(&self)
				.help(&format!("Make sure this file exists: {}", file_name))
				.build(),
		}
	}
}
