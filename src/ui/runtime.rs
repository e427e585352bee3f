use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::client::LoanGateway;
use crate::format::CurrencyMask;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the loan form until the user quits.
///
/// The UI loop owns the calling thread; submissions run on `runtime` and
/// report back through the event channel.
pub fn run(
    runtime: Handle,
    gateway: Arc<dyn LoanGateway>,
    currency: CurrencyMask,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(currency);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::Submit(snapshot) = handle_key(&mut app, key) {
                    let gateway = Arc::clone(&gateway);
                    let tx = events.sender();
                    runtime.spawn(async move {
                        let result = gateway.create_loan(&snapshot).await;
                        if let Err(lost) = tx.send(AppEvent::SubmitFinished(result)) {
                            if let AppEvent::SubmitFinished(result) = lost.0 {
                                tracing::debug!(?result, "Submission finished after the form closed");
                            }
                        }
                    });
                }
            }
            Ok(AppEvent::Paste(text)) => {
                if app.notice().is_none() {
                    app.on_paste(&text);
                }
            }
            Ok(AppEvent::SubmitFinished(result)) => app.finish_submit(result),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
