//! Remote Store Calls
//!
//! Typed wrappers around the four `todos`-table operations. Errors are
//! flattened to their display message at this boundary; callers decide how
//! to surface them.

use serde_json::json;
use supabase_rest::Order;

use crate::models::Todo;
use crate::supabase::supabase;

/// All rows, ordered by creation time ascending
pub async fn fetch_todos() -> Result<Vec<Todo>, String> {
    supabase()
        .from("todos")
        .select("*")
        .order("created_at", Order::Ascending)
        .fetch::<Vec<Todo>>()
        .await
        .map_err(|e| e.to_string())
}

/// Insert one row with store-side defaults and return it.
///
/// The store answers bulk inserts with an array, so the new row is its
/// first element.
pub async fn create_todo(task: &str) -> Result<Todo, String> {
    let rows: Vec<Todo> = supabase()
        .from("todos")
        .insert(json!([{ "task": task }]))
        .select("*")
        .fetch()
        .await
        .map_err(|e| e.to_string())?;
    rows.into_iter()
        .next()
        .ok_or_else(|| "insert returned no rows".to_string())
}

/// Set the completion flag of one row
pub async fn set_todo_complete(id: i64, is_complete: bool) -> Result<(), String> {
    supabase()
        .from("todos")
        .update(json!({ "is_complete": is_complete }))
        .eq("id", id)
        .execute()
        .await
        .map_err(|e| e.to_string())
}

/// Delete one row
pub async fn delete_todo(id: i64) -> Result<(), String> {
    supabase()
        .from("todos")
        .delete()
        .eq("id", id)
        .execute()
        .await
        .map_err(|e| e.to_string())
}
