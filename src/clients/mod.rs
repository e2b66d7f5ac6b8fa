//! HTTP transport and classification for the Zoop API.
//!
//! [`HttpClient`] handles the wire concerns (auth, headers, timeouts);
//! [`ZoopClient`] layers JSON method helpers on top and is what resources
//! talk to.

mod api_client;
pub mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use api_client::ZoopClient;
pub use errors::{classify, ApiError, ErrorDetail, InvalidRequestError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
