//! Type definitions for the Bitget UTA API

pub mod account;
pub mod api;
pub mod constants;
pub mod market;
pub mod orders;

// Re-export commonly used types
pub use account::*;
pub use api::*;
pub use market::*;
pub use orders::*;
