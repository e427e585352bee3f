//! Terminal front end for the loan form and the state it is built on.
//!
//! The state layers (`form`, `submission`, `controls`, `session`) have no
//! terminal dependency beyond crossterm key events and are what the tests
//! drive. `app`, `render` and `runtime` put them on screen.

pub mod app;
pub mod controls;
pub mod events;
pub mod form;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod session;
pub mod submission;
pub mod terminal_guard;
pub mod theme;
