//! Domain DTOs for the todos API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. The owner
//! is serialized as `userId` to match the wire format the front-end speaks.

use serde::{Deserialize, Serialize};

/// Numeric todo identifier. `0` never names a real todo and is used as "none".
pub type TodoId = u64;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(default)]
    pub completed: bool,
}
