//! HTTP bridge for the catalog pipeline
//!
//! All external calls (bibliographic listing, cover search, catalog search)
//! go through the [`HttpClient`](http::HttpClient) trait so that sources and
//! cover providers can be exercised against scripted responses in tests.
//! `ReqwestHttpClient` is the production implementation.

pub mod client;
pub mod error;
pub mod http;

pub use client::ReqwestHttpClient;
pub use error::{HttpError, Result};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
