//! Async API client for the todo service.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `TodoApi` pairs it with `HttpTransport` to
//! run the four operations (list, add, toggle status, delete) against a REST
//! backend, bounding selected calls with a timeout and translating every
//! failure into `ApiError`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Response bodies are opaque `serde_json::Value`s passed through as-is.
//! - Which calls are bounded is decided by `TimeoutPolicy` in `ClientConfig`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use client::TodoClient;
pub use config::{ClientConfig, Operation, TimeoutPolicy};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::HttpTransport;
pub use types::{NewTodo, PageRequest, TodoId, TodoItem};
