//! A single todo-list row (`TodoItem`) over a host-driven todos API.
//!
//! # Overview
//! `TodoItem` keeps the per-row UI state: the displayed value, the id being
//! deleted, the toggling flag and the last bulk-delete list it saw. Delete,
//! toggle and bulk-delete events return a [`Pending`] with the HTTP request
//! to run; the host executes it and hands the response back to
//! [`TodoItem::settle`], which notifies the parent through [`ItemHandlers`].
//!
//! # Design
//! - Nothing here touches the network (host-does-IO). [`TodoClient`] builds
//!   `HttpRequest` values and parses `HttpResponse` values.
//! - The item never mutates a [`Todo`]; the parent does, after the server
//!   accepted the change.
//! - All failures, including transport failures reported by the host, are
//!   forwarded to [`ItemHandlers::on_error`]. No retries.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod item;
pub mod list;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use item::{ItemHandlers, Operation, Pending, TodoItem, TodoProps};
pub use list::TodoList;
pub use types::{CreateTodo, Todo, TodoId};
pub use view::ItemView;
