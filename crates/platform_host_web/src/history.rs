//! `window.history`-backed navigation adapter.

use platform_host::NavigationHistory;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation history backed by `window.history`.
pub struct WebNavigationHistory;

impl WebNavigationHistory {
    /// Returns true when the current environment exposes a `window.history` object.
    pub fn is_available() -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window().and_then(|w| w.history().ok()).is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }
}

impl NavigationHistory for WebNavigationHistory {
    fn back(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let history = web_sys::window()
                .and_then(|w| w.history().ok())
                .ok_or_else(|| "window.history unavailable".to_string())?;
            history
                .back()
                .map_err(|e| format!("history.back failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err("window.history is only available when compiled for wasm32".to_string())
        }
    }
}
