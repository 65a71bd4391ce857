//! Todo Form Component
//!
//! Draft input plus add button. Submitting the form (button click or Enter)
//! validates the draft and inserts through the remote store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dialog;
use crate::store::{draft_is_valid, store_append_todo, store_set_error, use_app_store};

/// Form for creating new todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();
    let (new_task, set_new_task) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_task.get();
        if !draft_is_valid(&text) {
            // Rejected before any remote call; the error state stays untouched
            dialog::alert("Todo task cannot be empty!");
            return;
        }
        spawn_local(async move {
            match api::create_todo(&text).await {
                Ok(todo) => {
                    // The store-assigned created_at sorts after every loaded
                    // row, so appending keeps display order
                    store_append_todo(&store, todo);
                    set_new_task.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error adding todo: {}", e).into());
                    store_set_error(&store, e.clone());
                    dialog::alert(&format!("Failed to add todo: {}", e));
                }
            }
        });
    };

    view! {
        <form class="add-todo-form" style="display: flex; gap: 10px; padding: 10px 0;" on:submit=add_todo>
            <input
                type="text"
                size="30"
                placeholder="Type a new todo..."
                prop:value=new_task
                on:input=move |ev| set_new_task.set(event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
