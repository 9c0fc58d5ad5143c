//! Transport trait and the request executor.
//!
//! - [`Transport`] - the injected collaborator that performs the network
//!   exchange
//! - [`ApiClient`] - the executor that lowers an [`Endpoint`], sends it, and
//!   maps the response status to a typed outcome

use std::future::Future;

use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Endpoint, Error, Request, Response, Result};

/// HTTP transport capable of performing one network exchange.
///
/// The transport receives a fully-formed [`Request`] and returns either a
/// [`Response`] (any status code) or a transport-level failure (connection,
/// TLS, timeout). It owns connection reuse, timeouts, and cancellation; the
/// executor never retries or reclassifies its errors.
///
/// Substitute a fake implementation to test request execution without a
/// network.
pub trait Transport: Send + Sync {
    /// Perform the network exchange for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error for network-layer failures:
    /// - Connection errors (DNS, refusal)
    /// - TLS errors
    /// - Timeouts
    /// - Responses that are not usable HTTP
    fn send(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

/// Request executor over an injected [`Transport`].
///
/// Each call to [`ApiClient::send`] issues exactly one outbound request and
/// suspends at exactly one point, while awaiting the transport. Calls share
/// no mutable state, so a clone of the client can be used from any number of
/// tasks concurrently. Dropping the returned future while suspended abandons
/// the in-flight exchange.
///
/// # Example
///
/// ```ignore
/// use courier_core::{ApiClient, Endpoint};
///
/// #[derive(Debug, serde::Deserialize)]
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// let client = ApiClient::new(transport);
/// let endpoint = Endpoint::get("https://api.example.com", "/users/42").build();
/// let user: User = client.send(&endpoint).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T> ApiClient<T> {
    /// Create a new client over the given transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get a reference to the inner transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Consume the client and return the inner transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T: Transport> ApiClient<T> {
    /// Execute the endpoint and decode the response body as `R`.
    ///
    /// Lowers the endpoint to a request (no I/O), performs the exchange
    /// through the transport, then maps the status code:
    /// - 200-299: decode the body as `R`
    /// - 401: [`Error::Unauthorized`], regardless of body
    /// - anything else: [`Error::UnexpectedStatus`] carrying the body
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint does not lower to a valid request,
    /// the transport fails, the status is outside 200-299, or the body does
    /// not decode as `R`.
    pub async fn send<R: serde::de::DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<R> {
        let request = endpoint.to_request()?;

        let method = request.method();
        let url = request.url().to_string();
        let span = span!(Level::INFO, "api_request", %method, %url);

        async move {
            debug!(headers = ?request.headers(), "sending request");

            let response = match self.transport.send(request).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(error = %err, "transport failure");
                    return Err(err);
                }
            };

            let status = response.status();
            match status {
                200..=299 => {
                    info!(status, "request completed");
                    response.json()
                }
                401 => {
                    warn!(status, "request unauthorized");
                    Err(Error::Unauthorized)
                }
                _ => {
                    warn!(status, "request failed with unexpected status");
                    Err(Error::unexpected_status(status, Some(response.into_body())))
                }
            }
        }
        .instrument(span)
        .await
    }
}
