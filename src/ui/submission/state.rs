use std::fmt;

use crate::ui::form::FormState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Waiting on the lender service. New submits are refused until the
    /// response arrives.
    Submitting { snapshot: FormState },
    Succeeded { id: String },
    Failed { reason: String },
}

impl UiState for SubmissionState {}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting { .. })
    }

    /// What the user should be told about the last submission, if anything.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmissionState::Succeeded { id } => Some(Notice::Created { id: id.clone() }),
            SubmissionState::Failed { .. } => Some(Notice::Failed),
            _ => None,
        }
    }
}

/// User-facing outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created { id: String },
    /// Deliberately generic; details go to the log.
    Failed,
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Created { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Created { id } => {
                write!(f, "Loan created successfully! New Loan ID: {}", id)
            }
            Notice::Failed => write!(
                f,
                "Failed to submit loan data. Make sure the Lender Service backend is running."
            ),
        }
    }
}
