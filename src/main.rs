extern crate sklang;
use clap::{command, Arg, ArgAction};
use log::info;
use miette::{Diagnostic, NamedSource};
use sklang::analyzer::HintPass;
use sklang::lexer::{Lexer, LogosLexer};
use sklang::{CompilerError, ProvidesCompilerDiagnostic};
use std::fs;
use std::io;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PrettyIoError {
	#[error(transparent)]
	#[diagnostic(code(skhint::io_error))]
	IoError(#[from] std::io::Error),
}

fn read_source(file_name: &str) -> miette::Result<String> {
	fs::read_to_string(file_name).map_err(|err| match err.kind() {
		io::ErrorKind::NotFound => CompilerError::FileNotFound(file_name.into()).to_miette_report(),
		_ => PrettyIoError::IoError(err).into(),
	})
}

fn tokenize(file_name: &str, output: &mut dyn Write) -> miette::Result<()> {
	let code = read_source(file_name)?;
	let mut lexer = LogosLexer::new(&code);
	let tokens = lexer.process().map_err(|err| {
		err.to_miette_report()
			.with_source_code(NamedSource::new(file_name, code.clone()))
	})?;

	info!("'{}' has {} tokens", file_name, tokens.len());
	for t in &tokens {
		writeln!(output, "Token {:?} - {:?}", t.kind, t.text(&code)).map_err(PrettyIoError::from)?;
	}
	Ok(())
}

fn hints(pass: &mut HintPass, file_name: &str, json: bool, output: &mut dyn Write) -> miette::Result<()> {
	let code = read_source(file_name)?;
	let report = pass.run(file_name, &code).map_err(|err| {
		err.to_miette_report()
			.with_source_code(NamedSource::new(file_name, code.clone()))
	})?;

	if json {
		report
			.write_json(output)
			.map_err(|err| err.to_miette_report())?;
	}
	else {
		report.write_text(output).map_err(PrettyIoError::from)?;
	}

	pass.take_diagnostics().print_diagnostics(file_name, &code);
	Ok(())
}

fn main() -> miette::Result<()> {
	env_logger::init();

	let matches = command!()
		.arg(
			Arg::new("source")
				.required(true)
				.num_args(1..)
				.help("Script files to analyze"),
		)
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.help("Write the result to this file instead of stdout"),
		)
		.arg(
			Arg::new("mode")
				.short('m')
				.long("mode")
				.help("Specify which action should be performed")
				.value_parser(["tokenize", "hints"])
				.default_value("hints"),
		)
		.arg(
			Arg::new("json")
				.long("json")
				.action(ArgAction::SetTrue)
				.help("Print type hints as JSON"),
		)
		.get_matches();

	let mode = matches.get_one::<String>("mode").map(String::as_str).unwrap_or("hints");
	let json = matches.get_flag("json");
	let mut output: Box<dyn Write> = match matches.get_one::<String>("output") {
		None => Box::new(io::stdout()),
		Some(path) => Box::new(fs::File::create(path).map_err(PrettyIoError::from)?),
	};

	// One pass is reused for all files, every run starts from fresh hints
	let mut pass = HintPass::new();
	for file_name in matches.get_many::<String>("source").into_iter().flatten() {
		match mode {
			"tokenize" => tokenize(file_name, &mut output)?,
			_ => hints(&mut pass, file_name, json, &mut output)?,
		}
	}

	output.flush().map_err(PrettyIoError::from)?;
	Ok(())
}
