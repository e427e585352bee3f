//! Configuration for the form, the lender service and the portal service.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    BankLinkConfig, ClientConfig, Config, FormConfig, LenderConfig, PortalConfig,
};
