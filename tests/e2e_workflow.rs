//! Typing into the form the way a user would and checking both the screen
//! value and what lands in the store.

mod common;

use common::{key, type_into};
use crossterm::event::KeyCode;
use loan_intake::format::CurrencyMask;
use loan_intake::ui::controls::{FieldControl, KeyOutcome};
use loan_intake::ui::form::FieldId;
use loan_intake::ui::session::LoanFormSession;

fn display(session: &LoanFormSession, field: FieldId) -> String {
    session.control(field).display().to_string()
}

#[test]
fn phone_formats_as_digits_arrive() {
    let mut session = LoanFormSession::default();
    let expected = [
        "(5",
        "(55",
        "(555",
        "(555) 1",
        "(555) 12",
        "(555) 123",
        "(555) 123-4",
        "(555) 123-45",
        "(555) 123-456",
        "(555) 123-4567",
    ];
    session.focus(FieldId::PhoneNumber);
    for (c, want) in "5551234567".chars().zip(expected) {
        session.handle_key(key(KeyCode::Char(c)));
        assert_eq!(display(&session, FieldId::PhoneNumber), want);
    }

    // An eleventh digit is dropped.
    session.handle_key(key(KeyCode::Char('8')));
    assert_eq!(display(&session, FieldId::PhoneNumber), "(555) 123-4567");
    assert_eq!(session.state().borrower.phone_number, "5551234567");
}

#[test]
fn ssn_ignores_letters_and_groups_digits() {
    let mut session = LoanFormSession::default();
    type_into(&mut session, FieldId::Ssn, "12a3456789");
    assert_eq!(display(&session, FieldId::Ssn), "123-45-6789");
    assert_eq!(session.state().borrower.ssn, "123456789");
}

#[test]
fn backspace_over_separator_removes_a_digit() {
    let mut session = LoanFormSession::default();
    type_into(&mut session, FieldId::Ssn, "1234");
    assert_eq!(display(&session, FieldId::Ssn), "123-4");

    session.handle_key(key(KeyCode::Backspace));
    assert_eq!(session.state().borrower.ssn, "123");
    session.handle_key(key(KeyCode::Backspace));
    assert_eq!(session.state().borrower.ssn, "12");
    assert_eq!(display(&session, FieldId::Ssn), "12");
}

#[test]
fn currency_keeps_its_glyph() {
    let mut session = LoanFormSession::default();
    type_into(&mut session, FieldId::OriginalLoanAmount, "1234.567");
    assert_eq!(display(&session, FieldId::OriginalLoanAmount), "$1,234.56");
    assert_eq!(session.state().loan.original_loan_amount, "1234.56");

    session.handle_key(key(KeyCode::Home));
    assert_eq!(
        session.handle_key(key(KeyCode::Backspace)),
        KeyOutcome::Suppressed
    );
    assert_eq!(display(&session, FieldId::OriginalLoanAmount), "$1,234.56");
}

#[test]
fn currency_over_maximum_keeps_last_good_value() {
    let mut session = LoanFormSession::new(CurrencyMask::new(true, 1000.0));
    type_into(&mut session, FieldId::OriginalLoanAmount, "9999");
    assert_eq!(display(&session, FieldId::OriginalLoanAmount), "$999");
    assert_eq!(session.state().loan.original_loan_amount, "999");

    match session.control(FieldId::OriginalLoanAmount) {
        FieldControl::Masked(input) => assert!(input.last_rejection().is_some()),
        other => panic!("unexpected control {:?}", other),
    }
}

#[test]
fn employment_status_cycles_through_options() {
    let mut session = LoanFormSession::default();
    session.focus(FieldId::EmploymentStatus);
    session.handle_key(key(KeyCode::Right));
    assert_eq!(session.state().employment.status, "Full-time");
    session.handle_key(key(KeyCode::Right));
    assert_eq!(session.state().employment.status, "Part-time");
    session.handle_key(key(KeyCode::Left));
    assert_eq!(session.state().employment.status, "Full-time");
}

#[test]
fn store_values_flow_back_into_controls() {
    let mut session = LoanFormSession::default();
    session.set(FieldId::Ssn, "987654321");
    session.set(FieldId::OriginalLoanAmount, "2500000");
    assert_eq!(display(&session, FieldId::Ssn), "987-65-4321");
    assert_eq!(display(&session, FieldId::OriginalLoanAmount), "$2,500,000");
}
