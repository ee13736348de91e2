use crate::compiler_diagnostic::CompilerDiagnostic;

/// Collects the warnings produced while analyzing a script.
/// Errors are not buffered, they abort the analysis.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBuffer {
	warnings: Vec<CompilerDiagnostic>,
}

impl DiagnosticBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push_warning(&mut self, diag: CompilerDiagnostic) {
		self.warnings.push(diag);
	}

	pub fn clear(&mut self) {
		self.warnings.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.warnings.is_empty()
	}

	pub fn warnings(&self) -> &[CompilerDiagnostic] {
		&self.warnings
	}

	/// Renders all warnings to stderr against the named source
	pub fn print_diagnostics(self, file_name: &str, source_code: &str) {
		if self.warnings.is_empty() {
			return;
		}

		eprintln!("During analysis of '{}' the following diagnostics were generated:", file_name);
		for diag in self.warnings {
			eprintln!(
				"{:?}",
				miette::Report::new(diag)
					.with_source_code(miette::NamedSource::new(file_name, source_code.to_owned()))
			);
		}
	}
}
