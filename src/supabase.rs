//! Supabase Client Setup
//!
//! One process-wide handle to the remote store, built from two build-time
//! environment values that trunk bakes into the wasm bundle.

use once_cell::sync::Lazy;
use supabase_rest::Supabase;

const SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");
const SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

static CLIENT: Lazy<Supabase> = Lazy::new(|| {
    if SUPABASE_URL.is_none() || SUPABASE_ANON_KEY.is_none() {
        web_sys::console::error_1(
            &"Supabase URL or Anon Key is missing. Ensure SUPABASE_URL and SUPABASE_ANON_KEY \
              were set when the bundle was built."
                .into(),
        );
    }
    // Still construct the handle: calls fail at call time, not here
    Supabase::new(
        SUPABASE_URL.unwrap_or_default(),
        SUPABASE_ANON_KEY.unwrap_or_default(),
    )
});

/// The shared store client; created on first use, lives for the whole session
pub fn supabase() -> &'static Supabase {
    &CLIENT
}
