//! Blocking Dialogs
//!
//! Browser-alert wrapper used for mutation failures and input validation.

/// Show a blocking alert; no-op outside a browser context
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
