//! Submission state machine: Idle → Submitting → Succeeded | Failed.

mod intent;
mod reducer;
mod state;

pub use intent::SubmissionIntent;
pub use reducer::SubmissionReducer;
pub use state::{Notice, SubmissionState};
