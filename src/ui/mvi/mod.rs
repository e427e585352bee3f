//! Model-View-Intent primitives shared by the loan form.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The form store and the submission flow are both reducers: every state
//! transition goes through `reduce`, nothing else mutates state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
