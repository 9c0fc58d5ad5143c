//! Declarative endpoint descriptor.
//!
//! An [`Endpoint`] describes one API call: base URL, path, method, headers,
//! and parameters. It is a passive value; [`Endpoint::to_request`] lowers it
//! into a transport-level [`Request`] without performing any I/O.
//!
//! # Example
//!
//! ```
//! use courier_core::{Endpoint, Method};
//!
//! let endpoint = Endpoint::get("https://api.example.com", "/users")
//!     .header("Accept", "application/json")
//!     .param("page", "1")
//!     .build();
//!
//! let request = endpoint.to_request().expect("valid URL");
//! assert_eq!(request.url().as_str(), "https://api.example.com/users?page=1");
//! ```

use std::collections::{BTreeMap, HashMap};

use url::Url;

use crate::{Error, Method, Request, Result, encode_query, to_json};

/// Declarative description of one API call.
///
/// Parameters are a flat string-to-string mapping. For GET and DELETE they
/// become the query string; for POST, PUT, and PATCH they are serialized as a
/// JSON object body. A `BTreeMap` keeps iteration order deterministic, so
/// lowering the same endpoint twice yields an identical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    path: String,
    method: Method,
    headers: HashMap<String, String>,
    params: Option<BTreeMap<String, String>>,
}

impl Endpoint {
    /// Creates a new [`EndpointBuilder`].
    #[must_use]
    pub fn builder(
        method: Method,
        base_url: impl Into<String>,
        path: impl Into<String>,
    ) -> EndpointBuilder {
        EndpointBuilder::new(method, base_url, path)
    }

    /// Shorthand for a GET endpoint builder.
    #[must_use]
    pub fn get(base_url: impl Into<String>, path: impl Into<String>) -> EndpointBuilder {
        Self::builder(Method::Get, base_url, path)
    }

    /// Shorthand for a POST endpoint builder.
    #[must_use]
    pub fn post(base_url: impl Into<String>, path: impl Into<String>) -> EndpointBuilder {
        Self::builder(Method::Post, base_url, path)
    }

    /// Shorthand for a PUT endpoint builder.
    #[must_use]
    pub fn put(base_url: impl Into<String>, path: impl Into<String>) -> EndpointBuilder {
        Self::builder(Method::Put, base_url, path)
    }

    /// Shorthand for a PATCH endpoint builder.
    #[must_use]
    pub fn patch(base_url: impl Into<String>, path: impl Into<String>) -> EndpointBuilder {
        Self::builder(Method::Patch, base_url, path)
    }

    /// Shorthand for a DELETE endpoint builder.
    #[must_use]
    pub fn delete(base_url: impl Into<String>, path: impl Into<String>) -> EndpointBuilder {
        Self::builder(Method::Delete, base_url, path)
    }

    /// Base URL (scheme + authority, possibly with a path prefix).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Path appended to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Headers copied verbatim onto the request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Parameters, if any.
    #[must_use]
    pub const fn params(&self) -> Option<&BTreeMap<String, String>> {
        self.params.as_ref()
    }

    /// Lower this endpoint into a transport-level [`Request`].
    ///
    /// Performs URL assembly and the method-dependent parameter branch:
    /// GET/DELETE parameters become the query string (with every literal `+`
    /// escaped as `%2B`); POST/PUT/PATCH parameters become a JSON object
    /// body and no query string is attached. Headers are copied verbatim;
    /// none are synthesized.
    ///
    /// Never performs network I/O.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if the base URL does not parse or the path
    ///   cannot be appended to it.
    /// - [`Error::Serialize`] if parameters cannot be serialized into a JSON
    ///   body (POST/PUT/PATCH only).
    pub fn to_request(&self) -> Result<Request> {
        let base = Url::parse(&self.base_url)?;
        let url = append_path(base, &self.path)?;

        let mut builder = Request::builder(self.method, url).headers(
            self.headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        if let Some(params) = &self.params {
            if self.method.has_request_body() {
                builder = builder.body(to_json(params)?);
            } else if !params.is_empty() {
                let query =
                    encode_query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                builder = builder.raw_query(&query);
            }
        }

        Ok(builder.build())
    }
}

/// Append a path onto a parsed base URL, segment by segment.
///
/// Empty segments are dropped, so leading-slash inconsistency between base
/// and path does not produce `//` in the result.
fn append_path(mut url: Url, path: &str) -> Result<Url> {
    if path.is_empty() {
        return Ok(url);
    }

    // Cannot-be-a-base URLs (e.g. `mailto:`) have no path segments to extend.
    let display = url.as_str().to_owned();
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
        }
        Err(()) => {
            return Err(Error::invalid_url(format!(
                "cannot append path to '{display}'"
            )));
        }
    }

    Ok(url)
}

/// Builder for constructing [`Endpoint`] values.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    base_url: String,
    path: String,
    method: Method,
    headers: HashMap<String, String>,
    params: Option<BTreeMap<String, String>>,
}

impl EndpointBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            method,
            headers: HashMap::new(),
            params: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets a parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets multiple parameters.
    #[must_use]
    pub fn params(mut self, params: impl IntoIterator<Item = (String, String)>) -> Self {
        self.params.get_or_insert_with(BTreeMap::new).extend(params);
        self
    }

    /// Builds the [`Endpoint`].
    #[must_use]
    pub fn build(self) -> Endpoint {
        Endpoint {
            base_url: self.base_url,
            path: self.path,
            method: self.method,
            headers: self.headers,
            params: self.params,
        }
    }
}
