use crate::SourceSpan;
use miette::{Diagnostic, LabeledSpan, Severity};
use std::error::Error;
use std::fmt;

/// Error or warning about a script, rendered by miette
#[derive(Clone, Debug)]
pub struct CompilerDiagnostic {
	severity: Severity,
	message: String,
	help: Option<String>,
	code: Option<String>,
	labels: Vec<LabeledSpan>,
}

impl CompilerDiagnostic {
	pub fn code(&self) -> Option<&str> {
		self.code.as_deref()
	}
}

impl fmt::Display for CompilerDiagnostic {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl Error for CompilerDiagnostic {}

impl Diagnostic for CompilerDiagnostic {
	fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
		self.code.as_ref().map(|code| Box::new(code) as Box<dyn fmt::Display + 'a>)
	}

	fn severity(&self) -> Option<Severity> {
		Some(self.severity)
	}

	fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
		self.help.as_ref().map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
	}

	fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
		if self.labels.is_empty() {
			return None;
		}
		Some(Box::new(self.labels.iter().cloned()))
	}
}

/// Crafts a CompilerDiagnostic step by step, consumed by build()
pub struct CompilerDiagnosticBuilder {
	diag: CompilerDiagnostic,
}

impl CompilerDiagnosticBuilder {
	fn with_severity(severity: Severity, message: String) -> Self {
		Self {
			diag: CompilerDiagnostic {
				severity,
				message,
				help: None,
				code: None,
				labels: Vec::new(),
			},
		}
	}

	/// Error diagnostic carrying the error's message
	pub fn from_error<ErrorType: Error>(err: &ErrorType) -> Self {
		Self::with_severity(Severity::Error, err.to_string())
	}

	pub fn new_warning(message: &str) -> Self {
		Self::with_severity(Severity::Warning, message.to_owned())
	}

	/// Points at a region of the script
	pub fn label(mut self, span: SourceSpan, message: &str) -> Self {
		self.diag
			.labels
			.push(LabeledSpan::new_with_span(Some(message.to_owned()), span));
		self
	}

	pub fn error_code(mut self, code: &str) -> Self {
		self.diag.code = Some(code.to_owned());
		self
	}

	pub fn help(mut self, help: &str) -> Self {
		self.diag.help = Some(help.to_owned());
		self
	}

	pub fn build(self) -> CompilerDiagnostic {
		self.diag
	}
}

/// Implemented by every error type reported to the user
pub trait ProvidesCompilerDiagnostic {
	fn to_diagnostic(&self) -> CompilerDiagnostic;

	fn to_miette_report(&self) -> miette::Report {
		miette::Report::new(self.to_diagnostic())
	}
}
