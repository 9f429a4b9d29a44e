//! Reference parent for `TodoItem`: owns the todos and the bulk-delete list.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::item::{ItemHandlers, TodoProps};
use crate::types::{Todo, TodoId};

#[derive(Debug, Default, Clone)]
pub struct TodoList {
    todos: Vec<Todo>,
    ids_to_delete: Option<Vec<TodoId>>,
    error: Option<String>,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn props(&self) -> impl Iterator<Item = TodoProps> + '_ {
        self.todos.iter().map(TodoProps::from)
    }

    pub fn ids_to_delete(&self) -> Option<&[TodoId]> {
        self.ids_to_delete.as_deref()
    }

    /// Display text of the most recent failure, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn items_left(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Queue every completed todo for deletion. Items pick the list up
    /// through `TodoItem::sync_ids_to_delete`.
    pub fn clear_completed(&mut self) -> Vec<TodoId> {
        let ids: Vec<TodoId> = self
            .todos
            .iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.id)
            .collect();
        info!(count = ids.len(), "clearing completed todos");
        self.ids_to_delete = (!ids.is_empty()).then(|| ids.clone());
        ids
    }
}

impl ItemHandlers for TodoList {
    fn on_error(&mut self, error: ApiError) {
        self.error = Some(error.to_string());
    }

    fn handle_delete(&mut self, id: TodoId) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Items reset from the snapshot they started with, so ids that are no
    /// longer in the list are dropped here.
    fn reset_ids_to_delete(&mut self, ids: Vec<TodoId>) {
        let remaining: Vec<TodoId> = ids
            .into_iter()
            .filter(|id| self.todos.iter().any(|todo| todo.id == *id))
            .collect();
        debug!(remaining = remaining.len(), "bulk delete list reset");
        self.ids_to_delete = (!remaining.is_empty()).then_some(remaining);
    }

    fn handle_update(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|existing| existing.id == todo.id) {
            *slot = todo;
        }
    }
}
