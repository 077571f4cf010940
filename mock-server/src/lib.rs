use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub value: String,
    pub is_completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub value: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
    pub is_completed: Option<bool>,
}

fn default_size() -> usize {
    10
}

/// One page of todos, in id order.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoPage {
    pub items: Vec<Todo>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(toggle_todo).delete(delete_todo))
        .with_state(Db::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<TodoPage> {
    debug!(?params, "list todos");
    let store = db.read().await;
    let matching: Vec<&Todo> = store
        .todos
        .values()
        .filter(|t| params.is_completed.is_none_or(|c| t.is_completed == c))
        .collect();
    let items = matching
        .iter()
        .skip(params.page.saturating_mul(params.size))
        .take(params.size)
        .map(|t| (*t).clone())
        .collect();
    Json(TodoPage {
        items,
        total: matching.len(),
        page: params.page,
        size: params.size,
    })
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), (StatusCode, Json<Value>)> {
    if input.value.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "value must not be blank" })),
        ));
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        value: input.value,
        is_completed: input.is_completed,
    };
    store.todos.insert(todo.id, todo.clone());
    debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn toggle_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.is_completed = !todo.is_completed;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
