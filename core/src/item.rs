//! The `TodoItem` component: one row of the todo list.
//!
//! # Design
//! The component never performs I/O. Each event that needs the network
//! (`delete`, `toggle`, a bulk-delete list that names this item) returns a
//! [`Pending`] holding the request to execute. The host runs the round-trip
//! and passes the outcome to [`TodoItem::settle`], which updates local UI
//! state and notifies the parent through [`ItemHandlers`]. Between the two
//! calls the item is "pending" and its overlay is active.
//!
//! The component only ever reads its [`TodoProps`]. Persistent changes reach
//! the parent through the handlers, and only after the server accepted them.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Todo, TodoId};
use crate::view::ItemView;

/// Read-only view of the todo handed down by the parent list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoProps {
    pub id: TodoId,
    pub title: String,
    pub user_id: u64,
    /// Completion flag. Absent in the parent's data means "not completed".
    pub status: bool,
}

impl TodoProps {
    fn with_completed(&self, completed: bool) -> Todo {
        Todo {
            id: self.id,
            title: self.title.clone(),
            user_id: self.user_id,
            completed,
        }
    }
}

impl From<&Todo> for TodoProps {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            user_id: todo.user_id,
            status: todo.completed,
        }
    }
}

/// Callbacks the parent list supplies to every item.
pub trait ItemHandlers {
    /// Receives every failure of a remote call issued by the item.
    fn on_error(&mut self, error: ApiError);

    /// The server deleted the todo.
    fn handle_delete(&mut self, id: TodoId);

    /// Replace the list of ids awaiting bulk deletion.
    fn reset_ids_to_delete(&mut self, ids: Vec<TodoId>);

    /// The server stored an updated todo.
    fn handle_update(&mut self, todo: Todo);
}

/// What a [`Pending`] will do once it settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// User clicked the delete control.
    Delete { id: TodoId },
    /// The parent's bulk-delete list named this item. `ids_to_delete` is the
    /// list as it was when the request was issued.
    BulkDelete {
        id: TodoId,
        ids_to_delete: Vec<TodoId>,
    },
    /// User clicked the checkbox. `was_toggling` is restored on settle.
    Toggle { requested: Todo, was_toggling: bool },
}

/// A remote call the host must execute and then hand back to
/// [`TodoItem::settle`].
#[derive(Debug, Clone)]
#[must_use = "a pending operation does nothing until it is executed and settled"]
pub struct Pending {
    operation: Operation,
    request: HttpRequest,
}

impl Pending {
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }
}

/// Per-item UI state. Dropping the item drops the state.
#[derive(Debug, Clone)]
pub struct TodoItem {
    client: TodoClient,
    props: TodoProps,
    value: String,
    deleted_todo_id: TodoId,
    is_toggling: bool,
    ids_to_delete: Option<Vec<TodoId>>,
    synced: bool,
}

impl TodoItem {
    pub fn new(client: TodoClient, props: TodoProps) -> Self {
        Self {
            value: props.title.clone(),
            client,
            props,
            deleted_todo_id: 0,
            is_toggling: false,
            ids_to_delete: None,
            synced: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.props.id
    }

    pub fn props(&self) -> &TodoProps {
        &self.props
    }

    /// Re-render with fresh props from the parent. Local state survives.
    pub fn set_props(&mut self, props: TodoProps) {
        self.props = props;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Checkbox change event. Only the local display value changes.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_deleting(&self) -> bool {
        self.deleted_todo_id == self.props.id
    }

    pub fn is_toggling(&self) -> bool {
        self.is_toggling
    }

    pub fn overlay_active(&self) -> bool {
        self.is_deleting() || self.queued_for_bulk_delete() || self.is_toggling
    }

    fn queued_for_bulk_delete(&self) -> bool {
        self.ids_to_delete
            .as_deref()
            .is_some_and(|ids| ids.contains(&self.props.id))
    }

    pub fn view(&self) -> ItemView {
        ItemView {
            id: self.props.id,
            value: self.value.clone(),
            completed: self.props.status,
            overlay_active: self.overlay_active(),
        }
    }

    /// User clicked the delete control.
    pub fn delete(&mut self) -> Pending {
        let id = self.props.id;
        self.deleted_todo_id = id;
        debug!(id, "deleting todo");
        Pending {
            operation: Operation::Delete { id },
            request: self.client.build_delete_todo(id),
        }
    }

    /// Observe the parent's bulk-delete list.
    ///
    /// Issues a delete when the list differs from the last one observed (or
    /// is seen for the first time) and names this item. Every such change
    /// issues a fresh request, even while an earlier one is outstanding.
    pub fn sync_ids_to_delete(&mut self, ids: Option<&[TodoId]>) -> Option<Pending> {
        let changed = !self.synced || self.ids_to_delete.as_deref() != ids;
        self.synced = true;
        if !changed {
            return None;
        }
        self.ids_to_delete = ids.map(<[TodoId]>::to_vec);

        let id = self.props.id;
        let snapshot = self.ids_to_delete.clone().filter(|ids| ids.contains(&id))?;
        debug!(id, queued = snapshot.len(), "bulk deleting todo");
        Some(Pending {
            operation: Operation::BulkDelete {
                id,
                ids_to_delete: snapshot,
            },
            request: self.client.build_delete_todo(id),
        })
    }

    /// User clicked the checkbox. Requests the inverted completion status.
    ///
    /// Fails only if the todo cannot be encoded, in which case no state
    /// changes.
    pub fn toggle(&mut self) -> Result<Pending, ApiError> {
        let requested = self.props.with_completed(!self.props.status);
        let request = self.client.build_update_todo(&requested)?;
        let was_toggling = self.is_toggling;
        self.is_toggling = !was_toggling;
        debug!(id = requested.id, completed = requested.completed, "toggling todo");
        Ok(Pending {
            operation: Operation::Toggle {
                requested,
                was_toggling,
            },
            request,
        })
    }

    /// Apply the outcome of a pending call.
    ///
    /// `outcome` is the server's response, or the error the host hit while
    /// trying to obtain it. Both kinds of failure are forwarded to
    /// `handlers.on_error`.
    pub fn settle<H>(&mut self, pending: Pending, outcome: Result<HttpResponse, ApiError>, handlers: &mut H)
    where
        H: ItemHandlers + ?Sized,
    {
        match pending.operation {
            Operation::Delete { id } => {
                match outcome.and_then(|response| self.client.parse_delete_todo(response)) {
                    Ok(()) => handlers.handle_delete(id),
                    Err(error) => {
                        warn!(id, %error, "delete failed");
                        handlers.on_error(error);
                    }
                }
                self.deleted_todo_id = 0;
            }
            Operation::BulkDelete { id, ids_to_delete } => {
                match outcome.and_then(|response| self.client.parse_delete_todo(response)) {
                    Ok(()) => {
                        handlers.handle_delete(id);
                        handlers.reset_ids_to_delete(
                            ids_to_delete.into_iter().filter(|&other| other != id).collect(),
                        );
                    }
                    Err(error) => {
                        warn!(id, %error, "bulk delete failed");
                        handlers.on_error(error);
                    }
                }
            }
            Operation::Toggle {
                requested,
                was_toggling,
            } => {
                match outcome.and_then(|response| self.client.parse_update_todo(response)) {
                    Ok(stored) => handlers.handle_update(stored),
                    Err(error) => {
                        warn!(id = requested.id, %error, "update failed");
                        handlers.on_error(error);
                    }
                }
                self.is_toggling = was_toggling;
            }
        }
    }

    /// Execute `pending` on `transport` and settle it immediately.
    pub fn run<T, H>(&mut self, pending: Pending, transport: &T, handlers: &mut H)
    where
        T: Transport + ?Sized,
        H: ItemHandlers + ?Sized,
    {
        let outcome = transport.execute(pending.request.clone());
        self.settle(pending, outcome, handlers);
    }
}
