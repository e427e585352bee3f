use crate::ui::mvi::Reducer;

use super::field::FieldId;
use super::intent::FormIntent;
use super::reducer::FormReducer;
use super::state::FormState;

/// Owner of the live [`FormState`].
///
/// All mutation goes through [`FormStore::dispatch`].
#[derive(Debug, Default)]
pub struct FormStore {
    state: FormState,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field: FieldId) -> &str {
        field.get(&self.state)
    }

    /// Copy of the current state, e.g. for a submission payload.
    pub fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    /// Apply an intent. Returns whether the state changed.
    pub fn dispatch(&mut self, intent: FormIntent) -> bool {
        let before = std::mem::take(&mut self.state);
        let after = FormReducer::reduce(before.clone(), intent);
        let changed = after != before;
        self.state = after;
        changed
    }
}
