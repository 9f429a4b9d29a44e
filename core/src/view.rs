//! Render model for a todo row.

use askama::Template;

use crate::types::TodoId;

/// Snapshot of what a `TodoItem` shows. Produced by `TodoItem::view`.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "todo_item.html")]
pub struct ItemView {
    pub id: TodoId,
    pub value: String,
    pub completed: bool,
    pub overlay_active: bool,
}

impl ItemView {
    /// HTML fragment for the row. Text is escaped.
    pub fn render_html(&self) -> Result<String, askama::Error> {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ItemView {
        ItemView {
            id: 1,
            value: "Buy milk".to_string(),
            completed: false,
            overlay_active: false,
        }
    }

    #[test]
    fn renders_open_todo() {
        let html = view().render_html().unwrap();
        assert!(html.contains(r#"<div data-cy="Todo" class="todo">"#));
        assert!(html.contains(r#"<span data-cy="TodoTitle" class="todo__title">Buy milk</span>"#));
        assert!(html.contains(r#"data-cy="TodoDelete""#));
        assert!(html.contains(r#"class="modal overlay">"#));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn renders_completed_and_pending_todo() {
        let html = ItemView {
            completed: true,
            overlay_active: true,
            ..view()
        }
        .render_html()
        .unwrap();
        assert!(html.contains(r#"class="todo completed""#));
        assert!(html.contains(" checked "));
        assert!(html.contains(r#"class="modal overlay is-active""#));
    }

    #[test]
    fn escapes_title() {
        let html = ItemView {
            value: "<b>milk</b> & bread".to_string(),
            ..view()
        }
        .render_html()
        .unwrap();
        assert!(html.contains("&lt;b&gt;milk&lt;/b&gt; &amp; bread"));
        assert!(!html.contains("<b>"));
    }
}
