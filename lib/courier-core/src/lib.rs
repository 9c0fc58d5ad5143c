//! Core types and request executor for the courier HTTP client.
//!
//! This crate provides the transport-independent pieces:
//! - [`Endpoint`] and [`EndpointBuilder`] - declarative API call description
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - transport-level request
//! - [`Response`] - transport-level response
//! - [`Error`] and [`Result`] - error taxonomy
//! - [`Transport`] - trait for the injected network collaborator
//! - [`ApiClient`] - the request executor
//!
//! The concrete hyper-based transport lives in the `courier` crate.

mod body;
mod client;
mod endpoint;
mod error;
mod method;
pub mod prelude;
mod request;
mod response;

pub use body::{encode_query, from_json, to_json};
pub use client::{ApiClient, Transport};
pub use endpoint::{Endpoint, EndpointBuilder};
pub use error::{Error, Result};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;
