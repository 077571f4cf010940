//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! All status-code translation lives in the `parse_*` methods; `TodoApi`
//! runs the round-trip in between.
//!
//! Successful bodies are returned as `serde_json::Value` without any
//! reshaping, so new backend fields reach the caller untouched.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::{json, Value};

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, PageRequest, TodoId, TodoItem};

const JSON: &str = "application/json";

/// Characters that would end or split a single path segment.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self, page: &PageRequest) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos?{}", self.base_url, page.query()),
            headers: vec![
                ("accept".to_string(), JSON.to_string()),
                ("content-type".to_string(), JSON.to_string()),
            ],
            body: None,
        }
    }

    /// Only `value` and `isCompleted` are sent; the item's `id` is dropped.
    pub fn build_add_todo(&self, item: &TodoItem) -> Result<HttpRequest> {
        let body = serde_json::to_string(&NewTodo::from(item)).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), JSON.to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_todo_status(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    fn item_url(&self, id: &TodoId) -> String {
        let id = id.to_string();
        format!(
            "{}/todos/{}",
            self.base_url,
            utf8_percent_encode(&id, SEGMENT_ENCODE_SET)
        )
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Value> {
        check_status(&response, |_| None)?;
        decode(&response)
    }

    /// A 400 is always reported as `Validation`, whatever the body says.
    pub fn parse_add_todo(&self, response: HttpResponse) -> Result<Value> {
        check_status(&response, |status| (status == 400).then_some(ApiError::Validation))?;
        decode(&response)
    }

    pub fn parse_update_todo_status(&self, response: HttpResponse) -> Result<Value> {
        check_status(&response, not_found)?;
        decode(&response)
    }

    /// 204 yields `{"success": true}` and the body is never read.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Value> {
        check_status(&response, not_found)?;
        if response.status == 204 {
            return Ok(json!({ "success": true }));
        }
        decode(&response)
    }
}

fn not_found(status: u16) -> Option<ApiError> {
    (status == 404).then_some(ApiError::NotFound)
}

/// Pass 2xx through; otherwise let `special` claim the status before falling
/// back to `HttpError`.
fn check_status(
    response: &HttpResponse,
    special: impl FnOnce(u16) -> Option<ApiError>,
) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(special(response.status).unwrap_or_else(|| ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    }))
}

fn decode(response: &HttpResponse) -> Result<Value> {
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}
