use std::rc::Rc;

use platform_host::NavigationHistory;

use crate::WebNavigationHistory;

/// Returns the navigation history service for the current environment.
///
/// `None` means no history mechanism exists (no window, or not running in a browser); callers
/// relying on it for back-navigation must treat that as a misconfiguration.
pub fn navigation_history() -> Option<Rc<dyn NavigationHistory>> {
    if WebNavigationHistory::is_available() {
        Some(Rc::new(WebNavigationHistory))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_targets_have_no_navigation_history() {
        assert!(navigation_history().is_none());
        assert!(WebNavigationHistory.back().is_err());
        assert!(crate::document_meta_tags().is_empty());
    }
}
