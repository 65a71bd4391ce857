//! Frontend Models
//!
//! Data structures matching the remote `todos` table.

use serde::{Deserialize, Serialize};

/// One row of the `todos` table (matches the remote schema)
///
/// `id` and `created_at` are assigned by the store on insert. `created_at`
/// is kept as the ISO-8601 string PostgREST returns and never parsed here;
/// display ordering is delegated to the store's `order` parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub is_complete: bool,
    pub created_at: String,
}
