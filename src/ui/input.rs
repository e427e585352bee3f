use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::form::FormState;

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Send this snapshot to the lender service.
    Submit(FormState),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return InputAction::None;
    }

    // The notice is modal until dismissed.
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dismiss_notice();
        }
        return InputAction::None;
    }

    if is_ctrl_char(key, 's') || key.code == KeyCode::Enter {
        return match app.begin_submit() {
            Some(snapshot) => InputAction::Submit(snapshot),
            None => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::Down => app.session_mut().focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.session_mut().focus_prev(),
        _ => {
            app.on_key(key);
        }
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CurrencyMask;
    use crate::ui::form::FieldId;
    use crate::ui::submission::Notice;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn tab_moves_focus() {
        let mut app = App::new(CurrencyMask::default());
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.session().focused_field(), FieldId::FirstName);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.session().focused_field(), FieldId::UserId);
    }

    #[test]
    fn second_submit_while_pending_does_nothing() {
        let mut app = App::new(CurrencyMask::default());
        assert!(matches!(handle_key(&mut app, ctrl('s')), InputAction::Submit(_)));
        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), InputAction::None);
    }

    #[test]
    fn notice_swallows_keys_until_dismissed() {
        let mut app = App::new(CurrencyMask::default());
        handle_key(&mut app, press(KeyCode::Enter));
        app.finish_submit(Ok(crate::client::LoanCreated {
            message: String::new(),
            id: "Loans/1".into(),
        }));
        assert!(matches!(app.notice(), Some(Notice::Created { .. })));

        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.session().state().borrower.user_id, "");
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.notice().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(CurrencyMask::default());
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }
}
