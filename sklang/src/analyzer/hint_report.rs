use super::ScriptType;
use crate::{CompilerError, SourceSpan};
use serde::Serialize;
use std::io::{self, Write};

/// How the variable was used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
	/// Target of `set ... to`
	Assignment,
	Reference,
}

/// Type resolved for a single use of a local variable
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HintEntry {
	pub variable: String,
	pub kind: HintKind,

	/// `None` when no hint is known at this point
	pub hint: Option<ScriptType>,

	pub line: usize,
	pub span: SourceSpan,
}

/// Result of running the hint pass over one script
#[derive(Clone, Debug, Default, Serialize)]
pub struct HintReport {
	pub source_name: String,
	pub entries: Vec<HintEntry>,
}

impl HintReport {
	pub fn new(source_name: &str) -> Self {
		Self {
			source_name: source_name.to_owned(),
			entries: Vec::new(),
		}
	}

	pub fn push(&mut self, entry: HintEntry) {
		self.entries.push(entry);
	}

	/// Entries concerning the given variable, in source order
	pub fn entries_for<'a>(&'a self, variable: &'a str) -> impl Iterator<Item = &'a HintEntry> + 'a {
		self.entries.iter().filter(move |entry| entry.variable == variable)
	}

	/// Writes a human readable listing, one entry per line
	pub fn write_text(&self, output: &mut dyn Write) -> io::Result<()> {
		writeln!(output, "{}:", self.source_name)?;
		for entry in &self.entries {
			let hint = match entry.hint {
				Some(hint) => hint.to_string(),
				None => String::from("<no hint>"),
			};
			let arrow = match entry.kind {
				HintKind::Assignment => "<-",
				HintKind::Reference => "->",
			};
			writeln!(output, "\t{:>4}: {{{}}} {} {}", entry.line, entry.variable, arrow, hint)?;
		}
		Ok(())
	}

	/// Writes the report as pretty printed JSON followed by a newline
	pub fn write_json(&self, output: &mut dyn Write) -> Result<(), CompilerError> {
		serde_json::to_writer_pretty(&mut *output, self)?;
		writeln!(output)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> HintReport {
		let mut report = HintReport::new("demo.sk");
		report.push(HintEntry {
			variable: "_x".into(),
			kind: HintKind::Assignment,
			hint: Some(ScriptType::Number),
			line: 2,
			span: SourceSpan::new(10, 4),
		});
		report.push(HintEntry {
			variable: "_y".into(),
			kind: HintKind::Reference,
			hint: None,
			line: 3,
			span: SourceSpan::new(20, 4),
		});
		report
	}

	#[test]
	fn text_listing() {
		let mut out = Vec::new();
		sample().write_text(&mut out).unwrap();
		let text = String::from_utf8(out).unwrap();
		assert_eq!(text, "demo.sk:\n\t   2: {_x} <- number\n\t   3: {_y} -> <no hint>\n");
	}

	#[test]
	fn json_uses_lowercase_names() {
		let mut out = Vec::new();
		sample().write_json(&mut out).unwrap();
		let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(value["entries"][0]["hint"], "number");
		assert_eq!(value["entries"][0]["kind"], "assignment");
		assert!(value["entries"][1]["hint"].is_null());
		assert_eq!(value["entries"][1]["span"]["start"], 20);
	}

	/// Accepts nothing, like a closed pipe
	struct ClosedPipe;

	impl Write for ClosedPipe {
		fn write(&mut self, _: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn json_write_failure_is_reported() {
		let result = sample().write_json(&mut ClosedPipe);
		assert!(matches!(result, Err(CompilerError::JsonError(_))));
	}

	/// Takes a fixed number of bytes, then fails
	struct ShortPipe(usize);

	impl Write for ShortPipe {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			if buf.len() > self.0 {
				return Err(io::Error::new(io::ErrorKind::BrokenPipe, "full"));
			}
			self.0 -= buf.len();
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn failed_trailing_newline_is_io_error() {
		let report = sample();
		let json_len = serde_json::to_string_pretty(&report).unwrap().len();
		let result = report.write_json(&mut ShortPipe(json_len));
		assert!(matches!(result, Err(CompilerError::IoError(_))));
	}
}
