//! One live loan form: store, controls, submission state.

use crossterm::event::KeyEvent;

use crate::client::{LoanCreated, LoanGateway, SubmitError};
use crate::format::CurrencyMask;
use crate::ui::controls::{FieldControl, KeyOutcome};
use crate::ui::form::{FieldId, FormIntent, FormState, FormStore};
use crate::ui::mvi::Reducer;
use crate::ui::submission::{Notice, SubmissionIntent, SubmissionReducer, SubmissionState};

pub struct LoanFormSession {
    store: FormStore,
    controls: Vec<(FieldId, FieldControl)>,
    focused: usize,
    submission: SubmissionState,
}

impl LoanFormSession {
    pub fn new(currency: CurrencyMask) -> Self {
        let controls = FieldId::ALL
            .into_iter()
            .map(|id| (id, FieldControl::for_field(id, currency)))
            .collect();
        let mut session = Self {
            store: FormStore::new(),
            controls,
            focused: 0,
            submission: SubmissionState::default(),
        };
        session.controls[0].1.on_focus();
        session
    }

    pub fn state(&self) -> &FormState {
        self.store.state()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn controls(&self) -> impl Iterator<Item = (FieldId, &FieldControl)> {
        self.controls.iter().map(|(id, control)| (*id, control))
    }

    pub fn control(&self, field: FieldId) -> &FieldControl {
        &self.controls[Self::index_of(field)].1
    }

    pub fn focused_field(&self) -> FieldId {
        self.controls[self.focused].0
    }

    pub fn focus(&mut self, field: FieldId) {
        self.move_focus(Self::index_of(field));
    }

    pub fn focus_next(&mut self) {
        self.move_focus((self.focused + 1) % self.controls.len());
    }

    pub fn focus_prev(&mut self) {
        let len = self.controls.len();
        self.move_focus((self.focused + len - 1) % len);
    }

    /// Route a key to the focused control and store what it reports.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let (field, control) = &mut self.controls[self.focused];
        let field = *field;
        let outcome = control.on_key(key);
        if let KeyOutcome::Changed(value) = &outcome {
            self.store.dispatch(FormIntent::set(field, value.clone()));
        }
        outcome
    }

    /// Replace the text of `field` wholesale, as a paste would.
    pub fn input(&mut self, field: FieldId, raw: &str) -> String {
        let value = match &mut self.controls[Self::index_of(field)].1 {
            FieldControl::Masked(input) => input.on_input(raw),
            FieldControl::Choice(choice) => {
                choice.sync(raw);
                choice.value().to_string()
            }
        };
        self.store.dispatch(FormIntent::set(field, value.clone()));
        value
    }

    /// Store a canonical value directly and let the control catch up.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.store.dispatch(FormIntent::set(field, value));
        self.sync_controls();
    }

    /// Enter Submitting and hand back the payload, or `None` if a submission
    /// is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormState> {
        if self.submission.is_submitting() {
            tracing::warn!("Submit ignored: a submission is already in flight");
            return None;
        }
        let snapshot = self.store.snapshot();
        self.reduce_submission(SubmissionIntent::Submit {
            snapshot: snapshot.clone(),
        });
        Some(snapshot)
    }

    /// Apply the lender service's answer. Returns the notice to show, or
    /// `None` if nothing was in flight.
    pub fn complete_submit(
        &mut self,
        result: Result<LoanCreated, SubmitError>,
    ) -> Option<Notice> {
        if !self.submission.is_submitting() {
            return None;
        }
        match result {
            Ok(created) => {
                tracing::info!(id = %created.id, "Loan created");
                self.reduce_submission(SubmissionIntent::Created { id: created.id });
                self.store.dispatch(FormIntent::Reset);
                self.sync_controls();
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to submit loan data");
                self.reduce_submission(SubmissionIntent::Failed {
                    reason: err.to_string(),
                });
            }
        }
        self.submission.notice()
    }

    /// Run one complete submission against `gateway`.
    pub async fn submit<G>(&mut self, gateway: &G) -> Option<Notice>
    where
        G: LoanGateway + ?Sized,
    {
        let snapshot = self.begin_submit()?;
        let result = gateway.create_loan(&snapshot).await;
        self.complete_submit(result)
    }

    pub fn dismiss_notice(&mut self) {
        self.reduce_submission(SubmissionIntent::Dismiss);
    }

    fn reduce_submission(&mut self, intent: SubmissionIntent) {
        let state = std::mem::take(&mut self.submission);
        self.submission = SubmissionReducer::reduce(state, intent);
    }

    fn move_focus(&mut self, index: usize) {
        if index == self.focused {
            return;
        }
        let (field, control) = &mut self.controls[self.focused];
        if let Some(value) = control.on_blur() {
            let field = *field;
            self.store.dispatch(FormIntent::set(field, value));
        }
        self.focused = index;
        self.controls[index].1.on_focus();
    }

    fn sync_controls(&mut self) {
        let state = self.store.state();
        for (field, control) in &mut self.controls {
            control.sync(field.get(state));
        }
    }

    fn index_of(field: FieldId) -> usize {
        FieldId::ALL
            .iter()
            .position(|id| *id == field)
            .unwrap_or_default()
    }
}

impl Default for LoanFormSession {
    fn default() -> Self {
        Self::new(CurrencyMask::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_into(session: &mut LoanFormSession, field: FieldId, text: &str) {
        session.focus(field);
        for c in text.chars() {
            session.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn typed_phone_lands_in_store_as_digits() {
        let mut session = LoanFormSession::default();
        type_into(&mut session, FieldId::PhoneNumber, "5551234567");
        assert_eq!(session.control(FieldId::PhoneNumber).display(), "(555) 123-4567");
        assert_eq!(session.state().borrower.phone_number, "5551234567");
    }

    #[test]
    fn leaving_bare_currency_glyph_stores_empty() {
        let mut session = LoanFormSession::default();
        session.focus(FieldId::OriginalLoanAmount);
        assert_eq!(session.control(FieldId::OriginalLoanAmount).display(), "$");
        session.focus_next();
        assert_eq!(session.control(FieldId::OriginalLoanAmount).display(), "");
        assert_eq!(session.state().loan.original_loan_amount, "");
    }

    #[test]
    fn focus_wraps_around() {
        let mut session = LoanFormSession::default();
        assert_eq!(session.focused_field(), FieldId::UserId);
        session.focus_prev();
        assert_eq!(session.focused_field(), FieldId::MaturityDate);
        session.focus_next();
        assert_eq!(session.focused_field(), FieldId::UserId);
    }

    #[test]
    fn second_begin_submit_is_refused() {
        let mut session = LoanFormSession::default();
        assert!(session.begin_submit().is_some());
        assert!(session.begin_submit().is_none());
    }

    #[test]
    fn success_resets_store_and_controls() {
        let mut session = LoanFormSession::default();
        session.set(FieldId::OriginalLoanAmount, "7000");
        assert_eq!(session.control(FieldId::OriginalLoanAmount).display(), "$7,000");

        session.begin_submit();
        let notice = session.complete_submit(Ok(LoanCreated {
            message: "Loan created successfully".into(),
            id: "Loans/7".into(),
        }));
        assert_eq!(notice, Some(Notice::Created { id: "Loans/7".into() }));
        assert_eq!(session.state(), &FormState::default());
        assert_eq!(session.control(FieldId::OriginalLoanAmount).display(), "");
    }

    #[test]
    fn failure_keeps_store() {
        let mut session = LoanFormSession::default();
        session.set(FieldId::FirstName, "John");
        let before = session.state().clone();

        session.begin_submit();
        let notice = session.complete_submit(Err(SubmitError::Rejected {
            status: 500,
            message: "Failed to create loan".into(),
        }));
        assert_eq!(notice, Some(Notice::Failed));
        assert_eq!(session.state(), &before);
    }
}
