use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// Everything the loan form collects. This is also the JSON body sent to
/// `POST /api/loans`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub borrower: Borrower,
    pub employment: Employment,
    pub loan: Loan,
}

impl UiState for FormState {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Borrower {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Digits only.
    pub phone_number: String,
    pub birth_month: String,
    pub birth_day: String,
    pub birth_year: String,
    /// Digits only.
    pub ssn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employment {
    pub status: String,
    pub employer_name: String,
    pub job_title: String,
    pub start_month: String,
    pub start_day: String,
    pub start_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Loan {
    /// Digits and at most one decimal point, no `$` or `,`.
    pub original_loan_amount: String,
    pub interest_rate: String,
    pub loan_term: String,
    pub issue_date: String,
    pub maturity_date: String,
}
