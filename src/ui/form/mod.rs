//! The loan form's single source of truth.

mod field;
mod intent;
mod reducer;
mod state;
mod store;

pub use field::{FieldId, FieldPathError, Section};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{Borrower, Employment, FormState, Loan};
pub use store::FormStore;
