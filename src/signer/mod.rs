//! Credentials, configuration and HMAC request signing

pub mod config;
pub mod credentials;
pub mod signer;

pub use config::Config;
pub use credentials::Credentials;
pub use signer::{sign, signature_payload, BitgetSigner};
