//! REST plumbing: request assembly, transport, envelope decoding and the client

pub mod client;
pub mod request;
pub mod response;
pub mod transport;
pub mod utils;

pub use client::ApiClient;
pub use request::{PreparedRequest, RequestBuilder, RequestDescriptor};
pub use response::{decode, Response};
pub use transport::{RawResponse, ReqwestTransport, Transport};
