//! Loan intake: a masked-input loan form, the lender service that stores
//! submissions, and the borrower portal with bank linking.

pub mod client;
pub mod config;
pub mod format;
pub mod lender;
pub mod portal;
pub mod server;
pub mod ui;
