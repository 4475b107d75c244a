//! Browser Helpers
//!
//! Thin wrappers over `web_sys` for the few DOM calls the app makes.

/// `content` attribute of `<meta name=...>` in the host page
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Blocking alert; silently skipped outside a browser window
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("[DOM] alert failed: {}", message);
            }
        }
        None => log::warn!("[DOM] no window for alert: {}", message),
    }
}
