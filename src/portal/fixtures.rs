//! Canned borrower data served by the portal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub marital_status: String,
    pub education: String,
    pub birth_day: String,
    pub birth_month: String,
    pub birth_year: String,
    pub bank_name: String,
    pub account_holder_name: String,
    pub bsb: String,
    pub account_number: String,
    pub employment_status: String,
    pub employer_name: String,
    pub job_title: String,
    pub id_document: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            first_name: "John".into(),
            last_name: "Harper".into(),
            email: "Harper5755@yopmail.com".into(),
            phone_number: "555-123-4567".into(),
            marital_status: "Married".into(),
            education: "Bachelor's degree".into(),
            birth_day: "13".into(),
            birth_month: "10".into(),
            birth_year: "1985".into(),
            bank_name: "Commonwealth Bank".into(),
            account_holder_name: "John Harper".into(),
            bsb: "062-000".into(),
            account_number: "123456789".into(),
            employment_status: "Full-time".into(),
            employer_name: "Tech Solutions Inc.".into(),
            job_title: "Senior Software Engineer".into(),
            id_document: "passport.pdf".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub original_amount: f64,
    pub outstanding_balance: f64,
    pub next_payment_amount: f64,
    pub loan_term: u32,
    pub interest_rate: f64,
    pub principal_debt: f64,
    pub interest_balance: f64,
    pub overdue_principal_debt: f64,
    pub overdue_interest: f64,
    pub issue_date: String,
    pub maturity_date: String,
    pub end_date: String,
    #[serde(rename = "outstandingLTV")]
    pub outstanding_ltv: f64,
}

impl Default for LoanSummary {
    fn default() -> Self {
        Self {
            original_amount: 7000.00,
            outstanding_balance: 6440.32,
            next_payment_amount: 676.00,
            loan_term: 12,
            interest_rate: 12.0,
            principal_debt: 6404.45,
            interest_balance: 35.87,
            overdue_principal_debt: 0.0,
            overdue_interest: 0.0,
            issue_date: "Nov 29, 2024".into(),
            maturity_date: "Dec 15, 2025".into(),
            end_date: "Dec 29, 2025".into(),
            outstanding_ltv: 99.08,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub message: String,
    pub timestamp: String,
    pub action_type: String,
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".into(),
            message: "Please, sign the agreement for the loan application".into(),
            timestamp: "Nov 29, 20:48".into(),
            action_type: "sign".into(),
        },
        Activity {
            id: "2".into(),
            message: "Please, provide an additional information for the loan application".into(),
            timestamp: "Nov 29, 20:48".into(),
            action_type: "add-info".into(),
        },
    ]
}
