use crossterm::event::KeyEvent;

use crate::client::{LoanCreated, SubmitError};
use crate::format::CurrencyMask;
use crate::ui::controls::{FieldControl, KeyOutcome};
use crate::ui::form::FormState;
use crate::ui::session::LoanFormSession;
use crate::ui::submission::Notice;

/// Everything the terminal front end draws from.
pub struct App {
    session: LoanFormSession,
    notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(currency: CurrencyMask) -> Self {
        Self {
            session: LoanFormSession::new(currency),
            notice: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &LoanFormSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut LoanFormSession {
        &mut self.session
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.session.submission().is_submitting()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        self.session.handle_key(key)
    }

    /// Append pasted text to the focused control. Choice fields only take a
    /// paste that names one of their options.
    pub fn on_paste(&mut self, text: &str) {
        let field = self.session.focused_field();
        let raw = match self.session.control(field) {
            FieldControl::Masked(input) => format!("{}{}", input.display(), text),
            FieldControl::Choice(_) => text.trim().to_string(),
        };
        self.session.input(field, &raw);
    }

    /// Payload to send, or `None` while a submission is pending.
    pub fn begin_submit(&mut self) -> Option<FormState> {
        self.notice = None;
        self.session.begin_submit()
    }

    pub fn finish_submit(&mut self, result: Result<LoanCreated, SubmitError>) {
        if let Some(notice) = self.session.complete_submit(result) {
            self.notice = Some(notice);
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.session.dismiss_notice();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::FieldId;

    #[test]
    fn paste_into_phone_is_formatted() {
        let mut app = App::new(CurrencyMask::default());
        app.session_mut().focus(FieldId::PhoneNumber);
        app.on_paste("555");
        app.on_paste("1234567");
        assert_eq!(app.session().control(FieldId::PhoneNumber).display(), "(555) 123-4567");
        assert_eq!(app.session().state().borrower.phone_number, "5551234567");
    }

    #[test]
    fn junk_paste_into_amount_keeps_glyph() {
        let mut app = App::new(CurrencyMask::default());
        app.session_mut().focus(FieldId::OriginalLoanAmount);
        app.on_paste("abc");
        assert_eq!(app.session().control(FieldId::OriginalLoanAmount).display(), "$");
        assert_eq!(app.session().state().loan.original_loan_amount, "");
    }

    #[test]
    fn paste_into_choice_needs_an_option() {
        let mut app = App::new(CurrencyMask::default());
        app.session_mut().focus(FieldId::EmploymentStatus);
        app.on_paste(" Part-time ");
        assert_eq!(app.session().state().employment.status, "Part-time");
    }

    #[test]
    fn failed_submit_shows_notice_until_dismissed() {
        let mut app = App::new(CurrencyMask::default());
        assert!(app.begin_submit().is_some());
        assert!(app.is_submitting());
        app.finish_submit(Err(SubmitError::InvalidResponse("boom".into())));
        assert_eq!(app.notice(), Some(&Notice::Failed));
        app.dismiss_notice();
        assert!(app.notice().is_none());
    }
}
