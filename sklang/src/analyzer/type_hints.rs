use super::script_type::{ScriptType, TypeDescriptor};
use super::variable_name::is_local;
use super::TypeHintError;
use log::{debug, trace};
use std::collections::HashMap;

/// Type hints known in a single lexical scope
type HintScope<T> = HashMap<String, T>;

/// Tracks the most recently inferred type of local variables, per lexical
/// scope. Lookups search from the innermost scope outwards, so a hint set
/// in a nested section shadows the outer one until that section is exited.
///
/// One table is meant to live exactly as long as one parsing session.
#[derive(Debug, Clone)]
pub struct ScopeTypeTable<T: TypeDescriptor = ScriptType> {
	root: HintScope<T>,

	/// Innermost scope is the last one
	nested: Vec<HintScope<T>>,
}

impl<T: TypeDescriptor> Default for ScopeTypeTable<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: TypeDescriptor> ScopeTypeTable<T> {
	/// Creates a table with a single empty root scope
	pub fn new() -> Self {
		Self {
			root: HintScope::new(),
			nested: Vec::new(),
		}
	}

	/// Sets the hint for a variable in the innermost scope.
	/// Unknown types are ignored, they must not replace a more specific hint.
	pub fn record_hint(&mut self, variable: &str, hint: T) {
		debug_assert!(!variable.is_empty(), "type hint for an unnamed variable");
		if hint.is_unknown() {
			trace!("Ignoring unknown type hint for {{{}}}", variable);
			return;
		}

		debug!("Hinting {{{}}} as {:?} (depth {})", variable, hint, self.depth());
		self.innermost_mut().insert(variable.to_owned(), hint);
	}

	/// Finds the innermost hint for a local variable
	pub fn lookup_hint(&self, variable: &str) -> Result<Option<T>, TypeHintError> {
		if !is_local(variable) {
			return Err(TypeHintError::NonLocalVariable(variable.to_owned()));
		}

		let hint = self
			.nested
			.iter()
			.rev()
			.chain(std::iter::once(&self.root))
			.find_map(|scope| scope.get(variable))
			.cloned();
		trace!("Looked up {{{}}}: {:?}", variable, hint);
		Ok(hint)
	}

	/// Pushes a new, empty scope
	pub fn enter_scope(&mut self) {
		self.nested.push(HintScope::new());
		debug!("Entered type hint scope (depth {})", self.depth());
	}

	/// Discards the innermost scope with all its hints.
	/// The root scope cannot be exited.
	pub fn exit_scope(&mut self) -> Result<(), TypeHintError> {
		if self.nested.pop().is_none() {
			return Err(TypeHintError::RootScopeExit);
		}

		debug!("Exited type hint scope (depth {})", self.depth());
		Ok(())
	}

	/// Drops all hints and scopes, leaving a single empty root scope
	pub fn reset(&mut self) {
		self.root.clear();
		self.nested.clear();
		debug!("Type hints reset");
	}

	/// Number of active scopes, including the root one
	pub fn depth(&self) -> usize {
		self.nested.len() + 1
	}

	fn innermost_mut(&mut self) -> &mut HintScope<T> {
		match self.nested.last_mut() {
			Some(scope) => scope,
			None => &mut self.root,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use ScriptType::*;

	#[fixture]
	fn table() -> ScopeTypeTable {
		ScopeTypeTable::new()
	}

	#[rstest]
	fn reset_clears_everything(mut table: ScopeTypeTable) {
		table.record_hint("_x", Number);
		table.enter_scope();
		table.enter_scope();
		table.record_hint("_y", Text);

		table.reset();

		assert_eq!(table.depth(), 1);
		assert_eq!(table.lookup_hint("_x"), Ok(None));
		assert_eq!(table.lookup_hint("_y"), Ok(None));
		table.enter_scope();
		assert!(table.exit_scope().is_ok());
		assert_eq!(table.exit_scope(), Err(TypeHintError::RootScopeExit));
	}

	#[rstest]
	#[case("_x", Number)]
	#[case("_name", Text)]
	#[case("_list::*", Boolean)]
	fn recorded_hint_is_found(mut table: ScopeTypeTable, #[case] variable: &str, #[case] hint: ScriptType) {
		table.record_hint(variable, hint);
		assert_eq!(table.lookup_hint(variable), Ok(Some(hint)));
	}

	#[rstest]
	fn hints_are_overwritten_within_scope(mut table: ScopeTypeTable) {
		table.record_hint("_x", Number);
		table.record_hint("_x", Text);
		assert_eq!(table.lookup_hint("_x"), Ok(Some(Text)));
	}

	#[rstest]
	fn unknown_type_never_overwrites(mut table: ScopeTypeTable) {
		table.record_hint("_v", Number);
		table.record_hint("_v", Object);
		assert_eq!(table.lookup_hint("_v"), Ok(Some(Number)));
	}

	#[rstest]
	fn unknown_type_is_not_recorded(mut table: ScopeTypeTable) {
		table.record_hint("_v", Object);
		assert_eq!(table.lookup_hint("_v"), Ok(None));
	}

	#[rstest]
	fn inner_scope_shadows_outer(mut table: ScopeTypeTable) {
		table.record_hint("_v", Number);
		table.enter_scope();
		table.record_hint("_v", Text);
		assert_eq!(table.lookup_hint("_v"), Ok(Some(Text)));

		table.exit_scope().unwrap();
		assert_eq!(table.lookup_hint("_v"), Ok(Some(Number)));
	}

	#[rstest]
	fn sibling_scopes_do_not_share_hints(mut table: ScopeTypeTable) {
		table.enter_scope();
		table.record_hint("_a", Number);
		table.exit_scope().unwrap();
		table.enter_scope();
		assert_eq!(table.lookup_hint("_a"), Ok(None));
	}

	#[rstest]
	fn outer_hint_visible_through_nested_scopes(mut table: ScopeTypeTable) {
		table.record_hint("_x", Text);
		table.enter_scope();
		table.enter_scope();
		assert_eq!(table.depth(), 3);
		assert_eq!(table.lookup_hint("_x"), Ok(Some(Text)));
	}

	#[rstest]
	#[case("x")]
	#[case("player::balance")]
	fn non_local_lookup_fails(table: ScopeTypeTable, #[case] variable: &str) {
		assert_eq!(
			table.lookup_hint(variable),
			Err(TypeHintError::NonLocalVariable(variable.to_owned()))
		);
	}

	#[rstest]
	fn root_exit_keeps_table_usable(mut table: ScopeTypeTable) {
		table.record_hint("_x", Boolean);
		assert_eq!(table.exit_scope(), Err(TypeHintError::RootScopeExit));
		assert_eq!(table.depth(), 1);
		assert_eq!(table.lookup_hint("_x"), Ok(Some(Boolean)));
	}
}
