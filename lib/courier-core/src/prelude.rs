//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use courier_core::prelude::*;
//! ```

pub use crate::{
    ApiClient, Endpoint, EndpointBuilder, Error, Method, Request, RequestBuilder, Response,
    Result, Transport, from_json, to_json,
};
