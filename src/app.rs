//! Todo App Root
//!
//! Main application component: provides the store, runs the one initial
//! load, and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{TodoForm, TodoList};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());

    // Provide state to all children
    provide_context(store);

    // Fetch todos once on mount; a failure is terminal until remount
    Effect::new(move |_| {
        spawn_local(async move {
            store.loading().set(true);
            store.error().set(None);
            match api::fetch_todos().await {
                Ok(todos) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", todos.len()).into());
                    store.todos().set(todos);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching todos: {}", e).into());
                    store.error().set(Some(e));
                }
            }
            store.loading().set(false);
        });
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"My Todo App"</h1>
            </header>
            <main>
                <TodoForm />
                <TodoList />
            </main>
        </div>
    }
}
