use super::script_error::empty_section_warning;
use super::script_line::{split_lines, ScriptLine};
use super::variable_name::{is_local, name_at, variable_uses};
use super::{HintEntry, HintKind, HintReport, ScopeTypeTable, ScriptError, ScriptErrorKind, ScriptType, TypeHintError};
use crate::lexer::{KeywordKind, Lexer, LogosLexer, Token, TokenKind};
use crate::{CompilerError, DiagnosticBuffer, SourceSpan};
use log::{debug, info, trace};

/// Walks the section outline of a script and feeds the type hint table.
///
/// Sections are opened by lines ending with `:` and closed by dedenting.
/// Local variable assignments (`set {_x} to ...`) record hints and every
/// other local variable use is resolved against the hints known at that point.
/// Section entered by indenting below a header
struct OpenSection {
	indent: usize,

	/// Indentation character, tab or space
	style: Option<char>,
}

pub struct HintPass {
	hints: ScopeTypeTable,
	diagnostics: DiagnosticBuffer,
}

impl Default for HintPass {
	fn default() -> Self {
		Self::new()
	}
}

impl HintPass {
	pub fn new() -> Self {
		Self {
			hints: ScopeTypeTable::new(),
			diagnostics: DiagnosticBuffer::new(),
		}
	}

	pub fn hints(&self) -> &ScopeTypeTable {
		&self.hints
	}

	pub fn diagnostics(&self) -> &DiagnosticBuffer {
		&self.diagnostics
	}

	/// Hands over the diagnostics gathered so far
	pub fn take_diagnostics(&mut self) -> DiagnosticBuffer {
		std::mem::take(&mut self.diagnostics)
	}

	/// Analyzes a whole script. Hints and warnings from previous runs are
	/// discarded first.
	pub fn run(&mut self, source_name: &str, source: &str) -> Result<HintReport, CompilerError> {
		info!("Running hint pass on '{}'", source_name);
		self.hints.reset();
		self.diagnostics.clear();

		let tokens = LogosLexer::new(source).process()?;
		let mut report = HintReport::new(source_name);

		// Outermost first
		let mut sections: Vec<OpenSection> = Vec::new();
		let mut pending_header: Option<SourceSpan> = None;

		for line in split_lines(&tokens) {
			let indent = line.indent_width(source)?;
			let current = sections.last().map_or(0, |section| section.indent);

			match pending_header.take() {
				Some(_) if indent > current => {
					sections.push(OpenSection {
						indent,
						style: line.indent_style(source),
					});
					self.hints.enter_scope();
				},
				Some(header) => self.diagnostics.push_warning(empty_section_warning(header)),
				None if indent > current => {
					return Err(ScriptError::new(ScriptErrorKind::UnexpectedIndentation, line.indent).into());
				},
				None => {},
			}

			self.close_sections(&mut sections, indent, &line)?;

			// All open sections must be indented with the same character as the line
			let style = line.indent_style(source);
			if sections.iter().any(|section| section.style != style) {
				return Err(ScriptError::new(ScriptErrorKind::MixedIndentation, line.indent).into());
			}

			self.analyze_line(source, &line, &mut report)?;

			if line.opens_section() {
				pending_header = Some(line.span());
			}
		}

		if let Some(header) = pending_header {
			self.diagnostics.push_warning(empty_section_warning(header));
		}
		while sections.pop().is_some() {
			self.hints.exit_scope()?;
		}

		info!("Hint pass on '{}' resolved {} variable uses", source_name, report.entries.len());
		Ok(report)
	}

	/// Exits every section indented deeper than the line
	fn close_sections(
		&mut self,
		sections: &mut Vec<OpenSection>,
		indent: usize,
		line: &ScriptLine,
	) -> Result<(), CompilerError> {
		while let Some(top) = sections.last() {
			if indent >= top.indent {
				break;
			}
			sections.pop();
			self.hints.exit_scope()?;
		}

		if indent != sections.last().map_or(0, |section| section.indent) {
			return Err(ScriptError::new(ScriptErrorKind::InconsistentDedent, line.indent).into());
		}
		Ok(())
	}

	fn analyze_line(&mut self, source: &str, line: &ScriptLine, report: &mut HintReport) -> Result<(), TypeHintError> {
		match line.tokens {
			[Token {
				kind: TokenKind::Keyword(KeywordKind::Set),
				..
			}, target @ Token {
				kind: TokenKind::Variable,
				..
			}, Token {
				kind: TokenKind::Keyword(KeywordKind::To),
				..
			}, value @ ..] => {
				// Interpolated index variables of the target are read, not assigned
				let target_uses = variable_uses(source, target).into_iter().skip(1);
				self.resolve_uses(source, line.number, target_uses, report)?;
				self.resolve_references(source, line.number, value, report)?;
				let inferred = self.infer_type(source, value)?;

				let name = match target.variable_name(source) {
					Some(name) if is_local(name) => name,
					_ => {
						trace!("Line {}: not hinting global variable {}", line.number, target.text(source));
						return Ok(());
					},
				};

				debug!("Line {}: {{{}}} assigned {}", line.number, name, inferred);
				self.hints.record_hint(name, inferred);
				report.push(HintEntry {
					variable: name.to_owned(),
					kind: HintKind::Assignment,
					hint: self.hints.lookup_hint(name)?,
					line: line.number,
					span: target.range,
				});
				Ok(())
			},
			tokens => self.resolve_references(source, line.number, tokens, report),
		}
	}

	/// Reports the current hint of every local variable used by the tokens,
	/// including the ones interpolated into texts and variable names
	fn resolve_references(
		&self,
		source: &str,
		line: usize,
		tokens: &[Token],
		report: &mut HintReport,
	) -> Result<(), TypeHintError> {
		let uses = tokens.iter().flat_map(|token| variable_uses(source, token));
		self.resolve_uses(source, line, uses, report)
	}

	fn resolve_uses(
		&self,
		source: &str,
		line: usize,
		uses: impl IntoIterator<Item = SourceSpan>,
		report: &mut HintReport,
	) -> Result<(), TypeHintError> {
		for span in uses {
			let name = name_at(source, span);
			if !is_local(name) {
				continue;
			}

			report.push(HintEntry {
				variable: name.to_owned(),
				kind: HintKind::Reference,
				hint: self.hints.lookup_hint(name)?,
				line,
				span,
			});
		}
		Ok(())
	}

	/// Statically apparent type of an expression
	fn infer_type(&self, source: &str, tokens: &[Token]) -> Result<ScriptType, TypeHintError> {
		match tokens {
			[single] => self.operand_type(source, single),
			[sign, operand] if sign.text(source) == "-" => match self.operand_type(source, operand)? {
				ScriptType::Number => Ok(ScriptType::Number),
				_ => Ok(ScriptType::Object),
			},
			_ if self.is_numeric_chain(source, tokens)? => Ok(ScriptType::Number),
			_ => Ok(ScriptType::Object),
		}
	}

	/// `a + b - c ...` where all operands are numbers
	fn is_numeric_chain(&self, source: &str, tokens: &[Token]) -> Result<bool, TypeHintError> {
		if tokens.len() < 3 || tokens.len() % 2 == 0 {
			return Ok(false);
		}

		for (index, token) in tokens.iter().enumerate() {
			let fits = if index % 2 == 0 {
				self.operand_type(source, token)? == ScriptType::Number
			}
			else {
				token.kind == TokenKind::Symbol && matches!(token.text(source), "+" | "-" | "*" | "/")
			};
			if !fits {
				return Ok(false);
			}
		}
		Ok(true)
	}

	fn operand_type(&self, source: &str, token: &Token) -> Result<ScriptType, TypeHintError> {
		let operand = match token.kind {
			TokenKind::Number => ScriptType::Number,
			TokenKind::Text => ScriptType::Text,
			TokenKind::Boolean(_) => ScriptType::Boolean,
			TokenKind::Variable => match token.variable_name(source) {
				Some(name) if is_local(name) => self.hints.lookup_hint(name)?.unwrap_or(ScriptType::Object),
				_ => ScriptType::Object,
			},
			_ => ScriptType::Object,
		};
		Ok(operand)
	}
}
