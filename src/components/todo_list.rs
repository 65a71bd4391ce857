//! Todo List Component
//!
//! Renders the list states: loading, inline error, empty message, rows.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// The todo list with its loading and error states
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    // Rows render only once the load finished without a pending error
    let ready = move || !store.loading().get() && store.error().get().is_none();

    view! {
        <Show when=move || store.loading().get()>
            <p class="loading">"Loading todos..."</p>
        </Show>

        {move || store.error().get().map(|e| view! {
            <p class="error" style="color: red;">"Error: " {e}</p>
        })}

        <Show when=ready>
            <div class="todo-list">
                <Show
                    when=move || !store.todos().get().is_empty()
                    fallback=|| view! { <p>"No todos yet! Add one above."</p> }
                >
                    <For
                        each=move || store.todos().get()
                        // Key on the one mutable field too, so an in-place
                        // completion flip re-renders the row
                        key=|todo| (todo.id, todo.is_complete)
                        children=move |todo| view! { <TodoRow todo=todo /> }
                    />
                </Show>
            </div>
        </Show>
    }
}
