//! Declarative endpoint descriptions with typed JSON request execution.
//!
//! Describe an API call as an [`Endpoint`] (base URL, path, method, headers,
//! parameters) and execute it through an [`ApiClient`] to get a decoded,
//! strongly-typed result. URL assembly, query encoding, and status-code
//! handling live here so call sites do not re-implement them.
//!
//! # Example
//!
//! ```ignore
//! use courier::{ApiClient, Endpoint, HyperTransport};
//!
//! #[derive(Debug, serde::Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! let client = ApiClient::new(HyperTransport::new());
//!
//! let endpoint = Endpoint::get("https://api.example.com", "/users")
//!     .header("Accept", "application/json")
//!     .param("page", "1")
//!     .build();
//!
//! let users: Vec<User> = client.send(&endpoint).await?;
//! ```
//!
//! GET and DELETE parameters become the query string (with literal `+`
//! escaped as `%2B` so it survives form-style decoding); POST, PUT, and
//! PATCH parameters are serialized as a JSON object body.

mod config;
mod connector;
pub mod prelude;
mod transport;

pub use config::{TransportConfig, TransportConfigBuilder};
pub use transport::HyperTransport;

// Re-export core types
pub use courier_core::{
    ApiClient, Endpoint, EndpointBuilder, Error, Method, Request, RequestBuilder, Response,
    Result, Transport, encode_query, from_json, to_json,
};

// Re-export URL handling for callers that pre-parse URLs
pub use url;
