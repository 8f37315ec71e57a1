//! Continuation-token handling for listing operations.
//!
//! Listing operations do not return the next-page token in their result.
//! Instead the token is written to the caller's [`ExecutionContext`] under
//! [`NEXT_PAGE_TOKEN`] after every paging call, and removed when the remote
//! response carries none — an absent entry means the result set is
//! exhausted.

use std::collections::HashMap;
use std::sync::Mutex;

/// Context key under which the continuation token is stored.
pub const NEXT_PAGE_TOKEN: &str = "GoogleDrive_NEXT_PAGE_TOKEN";

/// A per-invocation key/value store standing in for the host execution
/// context (message properties, flow variables, and the like).
#[derive(Debug, Default)]
pub struct ExecutionContext {
    vars: Mutex<HashMap<String, String>>,
}

impl ExecutionContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a variable.
    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.lock().expect("context lock poisoned").get(key).cloned()
    }

    /// Writes a variable.
    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.vars
            .lock()
            .expect("context lock poisoned")
            .insert(key.to_string(), value.into());
    }

    /// Removes a variable.
    pub fn remove(&self, key: &str) {
        self.vars.lock().expect("context lock poisoned").remove(key);
    }

    /// Reads the stored continuation token, if any.
    pub fn page_token(&self) -> Option<String> {
        self.get(NEXT_PAGE_TOKEN)
    }
}

/// Saves a continuation token under `key`, or clears the entry when the
/// response carried no token (or an empty one).
pub fn save_page_token(ctx: &ExecutionContext, key: &str, token: Option<&str>) {
    match token {
        Some(t) if !t.is_empty() => ctx.set(key, t),
        _ => ctx.remove(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_stores_non_empty_token() {
        let ctx = ExecutionContext::new();
        save_page_token(&ctx, NEXT_PAGE_TOKEN, Some("tok-1"));
        assert_eq!(ctx.page_token(), Some("tok-1".to_string()));
    }

    #[test]
    fn save_clears_on_absent_token() {
        let ctx = ExecutionContext::new();
        ctx.set(NEXT_PAGE_TOKEN, "stale");

        save_page_token(&ctx, NEXT_PAGE_TOKEN, None);
        assert_eq!(ctx.page_token(), None);
    }

    #[test]
    fn save_clears_on_empty_token() {
        let ctx = ExecutionContext::new();
        ctx.set(NEXT_PAGE_TOKEN, "stale");

        save_page_token(&ctx, NEXT_PAGE_TOKEN, Some(""));
        assert_eq!(ctx.page_token(), None);
    }

    #[test]
    fn overwrites_previous_token() {
        let ctx = ExecutionContext::new();
        save_page_token(&ctx, NEXT_PAGE_TOKEN, Some("first"));
        save_page_token(&ctx, NEXT_PAGE_TOKEN, Some("second"));
        assert_eq!(ctx.page_token(), Some("second".to_string()));
    }
}
