pub mod analyzer;
pub mod core;
pub mod lexer;

pub use crate::core::compiler_diagnostic;
pub use crate::core::compiler_error;
pub use crate::core::source_span;
pub use crate::core::CompilerDiagnostic;
pub use crate::core::CompilerError;
pub use crate::core::DiagnosticBuffer;
pub use crate::core::SourceSpan;
pub use compiler_diagnostic::ProvidesCompilerDiagnostic;
