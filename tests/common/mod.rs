//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use loan_intake::config::ClientConfig;
use loan_intake::ui::form::FieldId;
use loan_intake::ui::session::LoanFormSession;
use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Client settings pointed at `base_url` with short timeouts.
pub fn client_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        lender_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 1,
    }
}

pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

// -- Form helpers -------------------------------------------------------------

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Focus `field` and type `text` one key at a time.
pub fn type_into(session: &mut LoanFormSession, field: FieldId, text: &str) {
    session.focus(field);
    for c in text.chars() {
        session.handle_key(key(KeyCode::Char(c)));
    }
}

/// Fill every section with plausible values.
pub fn fill_sample_loan(session: &mut LoanFormSession) {
    type_into(session, FieldId::UserId, "u-1");
    type_into(session, FieldId::FirstName, "John");
    type_into(session, FieldId::LastName, "Harper");
    type_into(session, FieldId::Email, "Harper5755@yopmail.com");
    type_into(session, FieldId::PhoneNumber, "5551234567");
    type_into(session, FieldId::Ssn, "123456789");
    type_into(session, FieldId::EmployerName, "Tech Solutions Inc.");
    type_into(session, FieldId::OriginalLoanAmount, "7000");
    type_into(session, FieldId::LoanTerm, "12");
}
