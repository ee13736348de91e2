mod hint_pass;
mod hint_report;
mod script_error;
mod script_line;
mod script_type;
mod type_hint_error;
pub mod type_hints;
pub mod variable_name;

pub use hint_pass::HintPass;
pub use hint_report::{HintEntry, HintKind, HintReport};
pub use script_error::{ScriptError, ScriptErrorKind};
pub use script_line::{split_lines, ScriptLine};
pub use script_type::{ScriptType, TypeDescriptor};
pub use type_hint_error::TypeHintError;
pub use type_hints::ScopeTypeTable;
