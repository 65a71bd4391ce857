//! Supabase REST Client
//!
//! Minimal typed client for the slice of PostgREST that Supabase exposes,
//! mirroring the supabase-js call shapes: `from(table)` followed by
//! `select`/`insert`/`update`/`delete`, with `eq` filters and ordering.
//! Works on wasm32 (browser fetch) and native targets alike.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by remote store calls
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, connection refused, fetch rejection)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response from the store. `message` is the human-readable
    /// text shown to users; `code`/`details`/`hint` carry the rest of the
    /// PostgREST error body when present.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
        details: Option<String>,
        hint: Option<String>,
    },

    /// 2xx response whose body could not be decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Error body PostgREST sends on failures
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl Error {
    /// Build an `Api` error from a non-2xx response body. Falls back to the
    /// status line when the body is not the expected JSON shape.
    fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        match parsed.and_then(|b| {
            b.message.map(|message| (message, b.code, b.details, b.hint))
        }) {
            Some((message, code, details, hint)) => Error::Api {
                status,
                message,
                code,
                details,
                hint,
            },
            None => {
                let body = body.trim();
                let message = if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status, body)
                };
                Error::Api {
                    status,
                    message,
                    code: None,
                    details: None,
                    hint: None,
                }
            }
        }
    }
}

/// Sort direction for [`Query::order`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn suffix(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// Handle to one Supabase project.
///
/// Cheap to clone; stateless aside from the connection pooling reqwest
/// manages internally.
#[derive(Clone, Debug)]
pub struct Supabase {
    rest_url: String,
    key: String,
    http: reqwest::Client,
}

impl Supabase {
    /// Create a client from the project endpoint and the anon key.
    ///
    /// Construction never fails; an empty or malformed endpoint or key
    /// surfaces as call-time errors instead.
    pub fn new(url: &str, key: &str) -> Self {
        Self {
            rest_url: format!("{}/rest/v1", url.trim_end_matches('/')),
            key: key.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Start a request against one table
    pub fn from(&self, table: &str) -> Table {
        Table {
            client: self.clone(),
            url: format!("{}/{}", self.rest_url, table),
        }
    }

    /// Auth header pairs sent with every request
    fn auth_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("apikey", self.key.clone()),
            ("Authorization", format!("Bearer {}", self.key)),
        ]
    }
}

/// One table of the remote store
pub struct Table {
    client: Supabase,
    url: String,
}

impl Table {
    /// Read rows; `columns` as in PostgREST's `select` parameter (`"*"` for all)
    pub fn select(self, columns: &str) -> Query {
        Query::new(self, Method::GET, None).with_param("select", columns)
    }

    /// Insert rows; pass a JSON object or an array of objects
    pub fn insert(self, rows: Value) -> Query {
        Query::new(self, Method::POST, Some(rows))
    }

    /// Update rows with the given changes; combine with `eq` filters
    pub fn update(self, changes: Value) -> Query {
        Query::new(self, Method::PATCH, Some(changes))
    }

    /// Delete rows; combine with `eq` filters
    pub fn delete(self) -> Query {
        Query::new(self, Method::DELETE, None)
    }
}

/// A request under construction
pub struct Query {
    client: Supabase,
    url: String,
    method: Method,
    params: Vec<(String, String)>,
    body: Option<Value>,
    returning: bool,
}

impl Query {
    fn new(table: Table, method: Method, body: Option<Value>) -> Self {
        Self {
            client: table.client,
            url: table.url,
            method,
            params: Vec::new(),
            body,
            returning: false,
        }
    }

    fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// After a write, request the affected rows back (supabase-js
    /// `.insert(..).select()`); without this the store answers 204.
    pub fn select(mut self, columns: &str) -> Self {
        if self.method != Method::GET {
            self.returning = true;
        }
        self.with_param("select", columns)
    }

    /// Keep only rows where `column` equals `value`
    pub fn eq(self, column: &str, value: impl ToString) -> Self {
        let filter = format!("eq.{}", value.to_string());
        self.with_param(column, &filter)
    }

    /// Order the result set by `column`
    pub fn order(self, column: &str, direction: Order) -> Self {
        let order = format!("{}.{}", column, direction.suffix());
        self.with_param("order", &order)
    }

    async fn send(self) -> Result<reqwest::Response, Error> {
        let Query {
            client,
            url,
            method,
            params,
            body,
            returning,
        } = self;

        let mut req = client.http.request(method, &url).query(&params);
        for (name, value) in client.auth_pairs() {
            req = req.header(name, value);
        }
        if returning {
            req = req.header("Prefer", "return=representation");
        }
        if let Some(body) = &body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| Error::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::from_response(status.as_u16(), &text));
        }
        Ok(resp)
    }

    /// Send the request and decode the JSON payload
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, Error> {
        let resp = self.send().await?;
        resp.json::<T>().await.map_err(|e| Error::Decode(e.to_string()))
    }

    /// Send the request and discard any payload
    pub async fn execute(self) -> Result<(), Error> {
        self.send().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> Supabase {
        Supabase::new("https://example.supabase.co/", "anon-key")
    }

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_rest_url_strips_trailing_slash() {
        assert_eq!(client().rest_url, "https://example.supabase.co/rest/v1");
        let bare = Supabase::new("https://example.supabase.co", "k");
        assert_eq!(bare.rest_url, "https://example.supabase.co/rest/v1");
    }

    #[test]
    fn test_select_builds_ordered_get() {
        let q = client()
            .from("todos")
            .select("*")
            .order("created_at", Order::Ascending);
        assert_eq!(q.method, Method::GET);
        assert_eq!(q.url, "https://example.supabase.co/rest/v1/todos");
        assert_eq!(q.params, params(&[("select", "*"), ("order", "created_at.asc")]));
        assert!(q.body.is_none());
        assert!(!q.returning);
    }

    #[test]
    fn test_order_descending_suffix() {
        let q = client().from("todos").select("*").order("created_at", Order::Descending);
        assert_eq!(q.params[1], ("order".to_string(), "created_at.desc".to_string()));
    }

    #[test]
    fn test_insert_with_select_requests_representation() {
        let q = client()
            .from("todos")
            .insert(json!([{ "task": "buy milk" }]))
            .select("*");
        assert_eq!(q.method, Method::POST);
        assert!(q.returning);
        assert_eq!(q.params, params(&[("select", "*")]));
        assert_eq!(q.body, Some(json!([{ "task": "buy milk" }])));
    }

    #[test]
    fn test_update_by_id_builds_patch_filter() {
        let q = client()
            .from("todos")
            .update(json!({ "is_complete": true }))
            .eq("id", 7);
        assert_eq!(q.method, Method::PATCH);
        assert!(!q.returning);
        assert_eq!(q.params, params(&[("id", "eq.7")]));
        assert_eq!(q.body, Some(json!({ "is_complete": true })));
    }

    #[test]
    fn test_delete_by_id_builds_delete_filter() {
        let q = client().from("todos").delete().eq("id", 3);
        assert_eq!(q.method, Method::DELETE);
        assert!(q.body.is_none());
        assert_eq!(q.params, params(&[("id", "eq.3")]));
    }

    #[test]
    fn test_auth_pairs_carry_key_and_bearer() {
        let pairs = client().auth_pairs();
        assert_eq!(pairs[0], ("apikey", "anon-key".to_string()));
        assert_eq!(pairs[1], ("Authorization", "Bearer anon-key".to_string()));
    }

    #[test]
    fn test_api_error_prefers_message_field() {
        let body = r#"{"code":"23505","message":"duplicate key value","details":null,"hint":null}"#;
        let err = Error::from_response(409, body);
        match &err {
            Error::Api { status, message, code, .. } => {
                assert_eq!(*status, 409);
                assert_eq!(message, "duplicate key value");
                assert_eq!(code.as_deref(), Some("23505"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "duplicate key value");
    }

    #[test]
    fn test_api_error_falls_back_to_status_line() {
        let err = Error::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502: <html>Bad Gateway</html>");
    }

    #[test]
    fn test_api_error_with_empty_body() {
        let err = Error::from_response(401, "");
        assert_eq!(err.to_string(), "HTTP 401");
    }
}
