use crate::ui::form::FormState;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SubmissionIntent {
    /// User asked to submit; carries the form as it is right now.
    Submit { snapshot: FormState },
    /// Lender service created the loan.
    Created { id: String },
    /// Non-success status or transport failure.
    Failed { reason: String },
    /// Notice acknowledged.
    Dismiss,
}

impl Intent for SubmissionIntent {}
