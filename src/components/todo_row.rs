//! Todo Row Component
//!
//! One todo with its completion checkbox and delete button. Local state is
//! patched only after the matching remote call succeeds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dialog;
use crate::models::Todo;
use crate::store::{store_remove_todo, store_set_complete, store_set_error, use_app_store};

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let is_complete = todo.is_complete;
    let task = todo.task.clone();

    let toggle_complete = move |_| {
        spawn_local(async move {
            match api::set_todo_complete(id, !is_complete).await {
                Ok(()) => store_set_complete(&store, id, !is_complete),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error toggling todo: {}", e).into());
                    store_set_error(&store, e.clone());
                    dialog::alert(&format!("Failed to update todo: {}", e));
                }
            }
        });
    };

    let delete_todo = move |_| {
        spawn_local(async move {
            match api::delete_todo(id).await {
                Ok(()) => store_remove_todo(&store, id),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting todo: {}", e).into());
                    store_set_error(&store, e.clone());
                    dialog::alert(&format!("Failed to delete todo: {}", e));
                }
            }
        });
    };

    view! {
        <div
            class=move || if is_complete { "todo-row completed" } else { "todo-row" }
            style="display: flex; align-items: center; gap: 10px; padding: 6px 0; border-bottom: 1px solid #eee;"
        >
            <input
                type="checkbox"
                checked=is_complete
                on:change=toggle_complete
            />
            <span
                class="todo-text"
                style=if is_complete { "text-decoration: line-through; color: #888;" } else { "" }
            >
                {task}
            </span>
            <button class="delete-btn" on:click=delete_todo>"Delete"</button>
        </div>
    }
}
