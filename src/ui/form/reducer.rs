use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetField { field, value } => {
                *field.slot(&mut state) = value;
                state
            }
            FormIntent::Reset => FormState::default(),
        }
    }
}
