//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The todo list is
//! a transient cache of the remote table; the reconciliation helpers are
//! success-gated and run only after the matching remote call has confirmed.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached copy of the remote table, in `created_at` order
    pub todos: Vec<Todo>,
    /// True while the initial load is in flight
    pub loading: bool,
    /// Latest failure message, shown inline until the next successful load
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a freshly inserted todo to the end of the list
pub fn store_append_todo(store: &AppStore, todo: Todo) {
    append_todo(&mut store.todos().write(), todo);
}

/// Set the completion flag of the todo matching `id`
pub fn store_set_complete(store: &AppStore, id: i64, is_complete: bool) {
    set_complete(&mut store.todos().write(), id, is_complete);
}

/// Remove the todo matching `id`
pub fn store_remove_todo(store: &AppStore, id: i64) {
    remove_todo(&mut store.todos().write(), id);
}

/// Record a failure message for the inline error region
pub fn store_set_error(store: &AppStore, message: String) {
    store.error().set(Some(message));
}

// List-level reconciliation, one function per remote operation

fn append_todo(todos: &mut Vec<Todo>, todo: Todo) {
    todos.push(todo);
}

fn set_complete(todos: &mut [Todo], id: i64, is_complete: bool) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
        todo.is_complete = is_complete;
    }
}

fn remove_todo(todos: &mut Vec<Todo>, id: i64) {
    todos.retain(|t| t.id != id);
}

/// True when a draft holds non-whitespace text; invalid drafts are
/// rejected before any remote call is made
pub fn draft_is_valid(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: i64, task: &str, is_complete: bool) -> Todo {
        Todo {
            id,
            task: task.to_string(),
            is_complete,
            created_at: format!("2024-05-01T09:00:0{}+00:00", id),
        }
    }

    #[test]
    fn test_append_adds_one_at_the_end() {
        let mut todos = vec![make_todo(1, "a", false), make_todo(2, "b", true)];
        append_todo(&mut todos, make_todo(3, "c", false));

        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[1].id, 2);
        assert_eq!(todos[2].id, 3);
    }

    #[test]
    fn test_set_complete_flips_only_matching_record() {
        let mut todos = vec![make_todo(1, "a", false), make_todo(2, "b", false)];
        set_complete(&mut todos, 2, true);

        assert!(!todos[0].is_complete);
        assert!(todos[1].is_complete);
        // every other field of the matching record is untouched
        assert_eq!(todos[1].task, "b");
        assert_eq!(todos[1].created_at, make_todo(2, "b", false).created_at);
    }

    #[test]
    fn test_set_complete_twice_restores_original() {
        let mut todos = vec![make_todo(1, "a", false)];
        set_complete(&mut todos, 1, true);
        set_complete(&mut todos, 1, false);

        assert!(!todos[0].is_complete);
    }

    #[test]
    fn test_set_complete_unknown_id_is_noop() {
        let mut todos = vec![make_todo(1, "a", false)];
        set_complete(&mut todos, 99, true);

        assert_eq!(todos, vec![make_todo(1, "a", false)]);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut todos = vec![
            make_todo(1, "a", false),
            make_todo(2, "b", false),
            make_todo(3, "c", true),
        ];
        remove_todo(&mut todos, 2);

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[1].id, 3);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut todos = vec![make_todo(1, "a", false)];
        remove_todo(&mut todos, 99);

        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn test_empty_and_whitespace_drafts_are_invalid() {
        assert!(!draft_is_valid(""));
        assert!(!draft_is_valid("   "));
        assert!(!draft_is_valid(" \t\n "));
    }

    #[test]
    fn test_padded_draft_is_valid() {
        assert!(draft_is_valid("buy milk"));
        assert!(draft_is_valid("  buy milk  "));
    }
}
