use serde::Serialize;
use std::fmt;

/// Identity of a type that can be stored as a type hint
pub trait TypeDescriptor: Clone + fmt::Debug {
	/// True for the universal type that carries no information
	fn is_unknown(&self) -> bool;
}

/// Types the hint pass can infer from script expressions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
	/// Top type, any value
	Object,
	Boolean,
	Number,
	Text,
}

impl TypeDescriptor for ScriptType {
	fn is_unknown(&self) -> bool {
		matches!(self, ScriptType::Object)
	}
}

impl fmt::Display for ScriptType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use ScriptType::*;
		let name = match self {
			Object => "object",
			Boolean => "boolean",
			Number => "number",
			Text => "text",
		};
		write!(f, "{}", name)
	}
}
