use crate::ui::mvi::Reducer;

use super::intent::SubmissionIntent;
use super::state::SubmissionState;

pub struct SubmissionReducer;

impl Reducer for SubmissionReducer {
    type State = SubmissionState;
    type Intent = SubmissionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SubmissionIntent::Submit { snapshot } => match state {
                SubmissionState::Submitting { .. } => state,
                _ => SubmissionState::Submitting { snapshot },
            },
            SubmissionIntent::Created { id } => match state {
                SubmissionState::Submitting { .. } => SubmissionState::Succeeded { id },
                other => other,
            },
            SubmissionIntent::Failed { reason } => match state {
                SubmissionState::Submitting { .. } => SubmissionState::Failed { reason },
                other => other,
            },
            SubmissionIntent::Dismiss => match state {
                SubmissionState::Succeeded { .. } | SubmissionState::Failed { .. } => {
                    SubmissionState::Idle
                }
                other => other,
            },
        }
    }
}
