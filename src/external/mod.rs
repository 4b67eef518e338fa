//! External IP observation via public echo services.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Querying IP echo services ([`ExternalIpProbe`])

mod client;
mod error;
mod http;
mod probe;


pub use client::ReqwestClient;
pub use error::{EndpointError, HttpError, ProbeError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use probe::{DEFAULT_ENDPOINTS, ExternalIpProbe};
