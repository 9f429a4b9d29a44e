//! In-memory implementation of the todos API.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub type TodoId = u64;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update. Unknown fields such as a repeated `id` are ignored.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<u64>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<u64>,
}

#[derive(Default)]
pub struct Db {
    todos: RwLock<BTreeMap<TodoId, Todo>>,
    next_id: AtomicU64,
}

impl Db {
    fn allocate_id(&self) -> TodoId {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

pub type SharedDb = Arc<Db>;

pub fn app() -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(SharedDb::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "todos mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<SharedDb>, Query(query): Query<ListQuery>) -> Json<Vec<Todo>> {
    let todos = db.todos.read().await;
    Json(
        todos
            .values()
            .filter(|todo| query.user_id.is_none_or(|user_id| todo.user_id == user_id))
            .cloned()
            .collect(),
    )
}

async fn create_todo(
    State(db): State<SharedDb>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: db.allocate_id(),
        title: input.title,
        user_id: input.user_id,
        completed: input.completed,
    };
    db.todos.write().await.insert(todo.id, todo.clone());
    debug!(id = todo.id, user_id = todo.user_id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<SharedDb>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = db.todos.read().await;
    todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<SharedDb>,
    Path(id): Path<TodoId>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.todos.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(user_id) = input.user_id {
        todo.user_id = user_id;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    debug!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<SharedDb>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.todos.write().await;
    let removed = todos.remove(&id).map(|_| StatusCode::NO_CONTENT);
    debug!(id, found = removed.is_some(), "delete todo");
    removed.ok_or(StatusCode::NOT_FOUND)
}
