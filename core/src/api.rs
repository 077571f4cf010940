//! Async facade over `TodoClient` and `HttpTransport`.
//!
//! # Design
//! Each method builds a request, runs it through the transport under the
//! bound `ClientConfig` assigns to that operation, and hands the response to
//! the matching `parse_*` method. Calls share nothing mutable, so any number
//! may be in flight on clones of the same `TodoApi`; completions arrive in
//! whatever order the server answers.

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::config::{ClientConfig, Operation};
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::HttpTransport;
use crate::types::{PageRequest, TodoId, TodoItem};

#[derive(Debug, Clone)]
pub struct TodoApi {
    client: TodoClient,
    transport: HttpTransport,
    config: ClientConfig,
}

impl TodoApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    pub fn with_transport(config: ClientConfig, transport: HttpTransport) -> Self {
        Self {
            client: TodoClient::new(&config.base_url),
            transport,
            config,
        }
    }

    /// Fetch one page of todos. The body is returned exactly as the backend
    /// sent it.
    pub async fn list_todos(&self, page: PageRequest) -> Result<Value> {
        let request = self.client.build_list_todos(&page);
        debug!(url = %request.url, "requesting todo list");

        let result = match self.send(request, Operation::List).await {
            Ok(response) => self.client.parse_list_todos(response),
            Err(e) => Err(e),
        };
        match &result {
            Ok(data) => debug!(payload = %data, "todo list response"),
            Err(e) => warn!(error = %e, "failed to fetch todo list"),
        }
        result
    }

    pub async fn add_todo(&self, item: &TodoItem) -> Result<Value> {
        let request = self.client.build_add_todo(item)?;
        let response = self.send(request, Operation::Add).await?;
        self.client.parse_add_todo(response)
    }

    /// Flip the completion flag of `id` on the server.
    pub async fn update_todo_status(&self, id: &TodoId) -> Result<Value> {
        let request = self.client.build_update_todo_status(id);
        let response = self.send(request, Operation::UpdateStatus).await?;
        self.client.parse_update_todo_status(response)
    }

    pub async fn delete_todo(&self, id: &TodoId) -> Result<Value> {
        let request = self.client.build_delete_todo(id);
        let response = self.send(request, Operation::Delete).await?;
        self.client.parse_delete_todo(response)
    }

    async fn send(&self, request: HttpRequest, operation: Operation) -> Result<HttpResponse> {
        self.transport
            .execute(request, self.config.timeout_for(operation))
            .await
    }
}
