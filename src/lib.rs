//! azkeyget
//!
//! Fetches a single secret from Azure Key Vault and writes its value to
//! stdout, authenticating with the default credential chain, a managed
//! identity, or a service principal.

pub mod cli;
pub mod config;
pub mod credential;
pub mod errors;
pub mod fetch;
pub mod keyvault;
pub mod logging;

pub use errors::RunError;
