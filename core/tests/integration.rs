//! Full todo lifecycle against the live mock server.
//!
//! # Design
//! `host_driven_lifecycle` executes `TodoClient`'s requests with ureq to
//! check the build/parse layer on its own. `api_lifecycle` runs the same
//! flow through `TodoApi` and its reqwest transport.

use std::net::SocketAddr;

use serde_json::{json, Value};
use todo_core::{
    ApiError, ClientConfig, HttpMethod, HttpResponse, PageRequest, TodoApi, TodoClient, TodoId,
    TodoItem,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`.
fn execute(req: todo_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

/// Start the mock server on its own runtime thread and return its address.
fn spawn_mock_server_thread() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

#[test]
fn host_driven_lifecycle() {
    let addr = spawn_mock_server_thread();
    let client = TodoClient::new(&format!("http://{addr}/api"));

    // Step 1: list, empty.
    let req = client.build_list_todos(&PageRequest::default());
    let page = client.parse_list_todos(execute(req)).unwrap();
    assert_eq!(page["total"], 0);

    // Step 2: blank value is rejected.
    let req = client.build_add_todo(&TodoItem::new("", false)).unwrap();
    let err = client.parse_add_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Validation));

    // Step 3: create.
    let req = client.build_add_todo(&TodoItem::new("Integration test", false)).unwrap();
    let created = client.parse_add_todo(execute(req)).unwrap();
    assert_eq!(created["value"], "Integration test");
    let id: TodoId = serde_json::from_value(created["id"].clone()).unwrap();

    // Step 4: toggle.
    let req = client.build_update_todo_status(&id);
    let toggled = client.parse_update_todo_status(execute(req)).unwrap();
    assert_eq!(toggled["isCompleted"], true);

    // Step 5: delete, then delete again.
    let req = client.build_delete_todo(&id);
    let deleted = client.parse_delete_todo(execute(req)).unwrap();
    assert_eq!(deleted, json!({"success": true}));

    let req = client.build_delete_todo(&id);
    let err = client.parse_delete_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn api_lifecycle() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));

    let api = TodoApi::new(ClientConfig::new(&format!("http://{addr}/api"))).unwrap();

    // Step 1: create two todos, one already done.
    let milk = api.add_todo(&TodoItem::new("buy milk", true)).await.unwrap();
    let bread = api.add_todo(&TodoItem::new("buy bread", false)).await.unwrap();
    assert_eq!(milk["isCompleted"], true);
    assert_eq!(bread["isCompleted"], false);

    // Step 2: filtered list returns the server envelope untouched.
    let done = api
        .list_todos(PageRequest::new(0, PageRequest::DEFAULT_SIZE, Some(true)))
        .await
        .unwrap();
    assert_eq!(
        done,
        json!({
            "items": [{"id": 1, "value": "buy milk", "isCompleted": true}],
            "total": 1,
            "page": 0,
            "size": 10,
        })
    );

    // Step 3: toggle bread; now both are done.
    let bread_id = TodoId::from(bread["id"].as_i64().unwrap());
    let toggled = api.update_todo_status(&bread_id).await.unwrap();
    assert_eq!(toggled["isCompleted"], true);
    let done = api
        .list_todos(PageRequest::new(0, PageRequest::DEFAULT_SIZE, Some(true)))
        .await
        .unwrap();
    assert_eq!(done["total"], 2);

    // Step 4: delete and confirm the not-found paths.
    let deleted = api.delete_todo(&bread_id).await.unwrap();
    assert_eq!(deleted, json!({"success": true}));
    let err = api.update_todo_status(&bread_id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    let err = api.delete_todo(&bread_id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 5: unfiltered list holds only milk.
    let all: Value = api.list_todos(PageRequest::default()).await.unwrap();
    assert_eq!(all["total"], 1);
    assert_eq!(all["items"][0]["value"], "buy milk");
}

#[tokio::test]
async fn concurrent_calls_share_one_api() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));

    let api = TodoApi::new(ClientConfig::new(&format!("http://{addr}/api"))).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let api = api.clone();
            tokio::spawn(async move { api.add_todo(&TodoItem::new(format!("task {i}"), false)).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let page = api.list_todos(PageRequest::default()).await.unwrap();
    assert_eq!(page["total"], 8);
}
