use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::state::FormState;

/// Top-level groups of the loan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Borrower,
    Employment,
    Loan,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Borrower, Section::Employment, Section::Loan];

    pub fn key(self) -> &'static str {
        match self {
            Section::Borrower => "borrower",
            Section::Employment => "employment",
            Section::Loan => "loan",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Borrower => "Borrower Personal Information",
            Section::Employment => "Borrower Employment Information",
            Section::Loan => "Loan Details",
        }
    }
}

/// One concrete field of [`FormState`].
///
/// Set-field intents are keyed by this enum, so an update can only ever name
/// a field that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    UserId,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    BirthMonth,
    BirthDay,
    BirthYear,
    Ssn,
    EmploymentStatus,
    EmployerName,
    JobTitle,
    StartMonth,
    StartDay,
    StartYear,
    OriginalLoanAmount,
    InterestRate,
    LoanTerm,
    IssueDate,
    MaturityDate,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 20] = [
        FieldId::UserId,
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::PhoneNumber,
        FieldId::BirthMonth,
        FieldId::BirthDay,
        FieldId::BirthYear,
        FieldId::Ssn,
        FieldId::EmploymentStatus,
        FieldId::EmployerName,
        FieldId::JobTitle,
        FieldId::StartMonth,
        FieldId::StartDay,
        FieldId::StartYear,
        FieldId::OriginalLoanAmount,
        FieldId::InterestRate,
        FieldId::LoanTerm,
        FieldId::IssueDate,
        FieldId::MaturityDate,
    ];

    pub fn section(self) -> Section {
        use FieldId::*;
        match self {
            UserId | FirstName | LastName | Email | PhoneNumber | BirthMonth | BirthDay
            | BirthYear | Ssn => Section::Borrower,
            EmploymentStatus | EmployerName | JobTitle | StartMonth | StartDay | StartYear => {
                Section::Employment
            }
            OriginalLoanAmount | InterestRate | LoanTerm | IssueDate | MaturityDate => {
                Section::Loan
            }
        }
    }

    /// JSON key inside the section object.
    pub fn key(self) -> &'static str {
        use FieldId::*;
        match self {
            UserId => "userId",
            FirstName => "firstName",
            LastName => "lastName",
            Email => "email",
            PhoneNumber => "phoneNumber",
            BirthMonth => "birthMonth",
            BirthDay => "birthDay",
            BirthYear => "birthYear",
            Ssn => "ssn",
            EmploymentStatus => "status",
            EmployerName => "employerName",
            JobTitle => "jobTitle",
            StartMonth => "startMonth",
            StartDay => "startDay",
            StartYear => "startYear",
            OriginalLoanAmount => "originalLoanAmount",
            InterestRate => "interestRate",
            LoanTerm => "loanTerm",
            IssueDate => "issueDate",
            MaturityDate => "maturityDate",
        }
    }

    pub fn label(self) -> &'static str {
        use FieldId::*;
        match self {
            UserId => "Borrower User ID",
            FirstName => "First Name",
            LastName => "Last Name",
            Email => "Email",
            PhoneNumber => "Phone Number",
            BirthMonth => "Birth Month",
            BirthDay => "Birth Day",
            BirthYear => "Birth Year",
            Ssn => "Social Security Number",
            EmploymentStatus => "Employment Status",
            EmployerName => "Employer Name",
            JobTitle => "Job Title",
            StartMonth => "Start Month",
            StartDay => "Start Day",
            StartYear => "Start Year",
            OriginalLoanAmount => "Original Loan Amount",
            InterestRate => "Interest Rate (%)",
            LoanTerm => "Loan Term (Months)",
            IssueDate => "Issue Date",
            MaturityDate => "Maturity Date",
        }
    }

    pub fn get(self, state: &FormState) -> &str {
        use FieldId::*;
        let b = &state.borrower;
        let e = &state.employment;
        let l = &state.loan;
        match self {
            UserId => &b.user_id,
            FirstName => &b.first_name,
            LastName => &b.last_name,
            Email => &b.email,
            PhoneNumber => &b.phone_number,
            BirthMonth => &b.birth_month,
            BirthDay => &b.birth_day,
            BirthYear => &b.birth_year,
            Ssn => &b.ssn,
            EmploymentStatus => &e.status,
            EmployerName => &e.employer_name,
            JobTitle => &e.job_title,
            StartMonth => &e.start_month,
            StartDay => &e.start_day,
            StartYear => &e.start_year,
            OriginalLoanAmount => &l.original_loan_amount,
            InterestRate => &l.interest_rate,
            LoanTerm => &l.loan_term,
            IssueDate => &l.issue_date,
            MaturityDate => &l.maturity_date,
        }
    }

    pub(crate) fn slot(self, state: &mut FormState) -> &mut String {
        use FieldId::*;
        let b = &mut state.borrower;
        let e = &mut state.employment;
        let l = &mut state.loan;
        match self {
            UserId => &mut b.user_id,
            FirstName => &mut b.first_name,
            LastName => &mut b.last_name,
            Email => &mut b.email,
            PhoneNumber => &mut b.phone_number,
            BirthMonth => &mut b.birth_month,
            BirthDay => &mut b.birth_day,
            BirthYear => &mut b.birth_year,
            Ssn => &mut b.ssn,
            EmploymentStatus => &mut e.status,
            EmployerName => &mut e.employer_name,
            JobTitle => &mut e.job_title,
            StartMonth => &mut e.start_month,
            StartDay => &mut e.start_day,
            StartYear => &mut e.start_year,
            OriginalLoanAmount => &mut l.original_loan_amount,
            InterestRate => &mut l.interest_rate,
            LoanTerm => &mut l.loan_term,
            IssueDate => &mut l.issue_date,
            MaturityDate => &mut l.maturity_date,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section().key(), self.key())
    }
}

/// A `section.field` path that does not name a form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldPathError {
    #[error("expected 'section.field', got '{0}'")]
    Malformed(String),

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("section '{section}' has no field '{field}'")]
    UnknownField { section: String, field: String },
}

impl FromStr for FieldId {
    type Err = FieldPathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let (section, field) = path
            .split_once('.')
            .ok_or_else(|| FieldPathError::Malformed(path.to_string()))?;

        if !Section::ALL.iter().any(|s| s.key() == section) {
            return Err(FieldPathError::UnknownSection(section.to_string()));
        }

        FieldId::ALL
            .into_iter()
            .find(|id| id.section().key() == section && id.key() == field)
            .ok_or_else(|| FieldPathError::UnknownField {
                section: section.to_string(),
                field: field.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_display() {
        for id in FieldId::ALL {
            let parsed: FieldId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn keys_match_serialized_state() {
        let json = serde_json::to_value(FormState::default()).unwrap();
        for id in FieldId::ALL {
            assert!(
                json[id.section().key()].get(id.key()).is_some(),
                "missing {}",
                id
            );
        }
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(
            "borrower".parse::<FieldId>(),
            Err(FieldPathError::Malformed("borrower".into()))
        );
        assert_eq!(
            "lender.id".parse::<FieldId>(),
            Err(FieldPathError::UnknownSection("lender".into()))
        );
        assert!(matches!(
            "loan.ssn".parse::<FieldId>(),
            Err(FieldPathError::UnknownField { .. })
        ));
    }

    #[test]
    fn slot_and_get_address_the_same_field() {
        let mut state = FormState::default();
        for id in FieldId::ALL {
            *id.slot(&mut state) = id.key().to_string();
        }
        for id in FieldId::ALL {
            assert_eq!(id.get(&state), id.key());
        }
    }
}
