//! Domain DTOs for the todo API.
//!
//! # Design
//! The client passes response bodies through as `serde_json::Value` and only
//! types what it has to send: the create payload and the page parameters.
//! `TodoItem` exists so callers can hand a full item to `add_todo`, and for
//! callers that want to deserialize a passed-through value themselves.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier. The backend may use numbers or strings; the
/// client only ever renders it into a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Number(n)
    }
}

/// Digits become `Number` only when they render back to the same text, so
/// `"007"` or `"+5"` stay `Text` and reach the server unchanged.
impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => TodoId::Number(n),
            _ => TodoId::Text(s.to_string()),
        }
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => TodoId::Number(n),
            _ => TodoId::Text(s),
        }
    }
}

/// A single todo item as the backend represents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub value: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoItem {
    pub fn new(value: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id: None,
            value: value.into(),
            is_completed,
        }
    }
}

/// Request payload for creating a todo: exactly `{value, isCompleted}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo<'a> {
    pub value: &'a str,
    pub is_completed: bool,
}

impl<'a> From<&'a TodoItem> for NewTodo<'a> {
    fn from(item: &'a TodoItem) -> Self {
        Self {
            value: &item.value,
            is_completed: item.is_completed,
        }
    }
}

/// Paging and filter parameters for listing todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: NonZeroU32,
    pub completed: Option<bool>,
}

impl PageRequest {
    pub const DEFAULT_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub fn new(page: u32, size: NonZeroU32, completed: Option<bool>) -> Self {
        Self {
            page,
            size,
            completed,
        }
    }

    /// Renders the query string, without the leading `?`.
    pub fn query(&self) -> String {
        let mut query = format!("page={}&size={}", self.page, self.size);
        if let Some(completed) = self.completed {
            query.push_str(&format!("&isCompleted={completed}"));
        }
        query
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE, None)
    }
}
