//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use courier::prelude::*;
//! ```

pub use crate::{
    ApiClient, Endpoint, EndpointBuilder, Error, HyperTransport, Method, Request, Response,
    Result, Transport, TransportConfig, from_json, to_json,
};
pub use serde::{Deserialize, Serialize};
