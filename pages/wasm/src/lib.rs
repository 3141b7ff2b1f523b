//! WASM module for browser-native page behavior.
//!
//! This module exposes the carousel stepping and theme resolution logic to
//! the generated pages. The inline application script prefers these exports
//! over its JavaScript fallback when the module is loaded, so the browser
//! and the native renderer run the same arithmetic.
//!
//! Uses canonical types from `page-leptos::types`; nothing is re-implemented
//! here.

use wasm_bindgen::prelude::*;

// Re-export canonical types from page-leptos
pub use page_leptos::types::{Carousel, Slide, Theme};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ============================================================================
// WASM Exports
// ============================================================================

/// Advance a carousel index: `(index + 1) mod len`.
///
/// # Arguments
/// * `index` - Current slide index
/// * `len` - Slide count
///
/// # Returns
/// The next index, or an error for an empty carousel (`len == 0`).
#[wasm_bindgen]
pub fn carousel_next(index: usize, len: usize) -> Result<usize, JsValue> {
    Carousel::wrap_forward(index, len)
        .ok_or_else(|| JsValue::from_str("carousel has no slides"))
}

/// Step a carousel index back: `(index - 1 + len) mod len`.
///
/// # Arguments
/// * `index` - Current slide index
/// * `len` - Slide count
///
/// # Returns
/// The previous index, or an error for an empty carousel (`len == 0`).
#[wasm_bindgen]
pub fn carousel_previous(index: usize, len: usize) -> Result<usize, JsValue> {
    Carousel::wrap_back(index, len)
        .ok_or_else(|| JsValue::from_str("carousel has no slides"))
}

/// Jump directly to a slide.
///
/// Out-of-range targets are a no-op: the current index comes back unchanged,
/// matching `Carousel::go_to`.
#[wasm_bindgen]
pub fn carousel_go_to(current: usize, target: usize, len: usize) -> usize {
    if target < len { target } else { current }
}

/// Resolve a persisted theme value the way the pages do.
///
/// Absent or unrecognized values resolve to `"dark"`.
#[wasm_bindgen]
pub fn resolve_theme(stored: Option<String>) -> String {
    Theme::from_stored(stored.as_deref()).as_str().to_string()
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("page-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(carousel_next(0, 3).unwrap(), 1);
        assert_eq!(carousel_next(2, 3).unwrap(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        assert_eq!(carousel_previous(1, 3).unwrap(), 0);
        assert_eq!(carousel_previous(0, 3).unwrap(), 2);
    }

    #[test]
    fn test_empty_carousel_is_an_error() {
        assert!(carousel_next(0, 0).is_err());
        assert!(carousel_previous(0, 0).is_err());
        assert_eq!(carousel_go_to(0, 5, 0), 0);
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        assert_eq!(carousel_go_to(1, 4, 6), 4);
        assert_eq!(carousel_go_to(1, 6, 6), 1);
        assert_eq!(carousel_go_to(1, 99, 6), 1);
    }

    #[test]
    fn test_go_to_matches_canonical_state() {
        let slides = (0..6).map(|i| Slide::new(format!("/s{i}.png"), "")).collect();
        let mut state = Carousel::new(slides).unwrap();
        state.go_to(4);
        assert_eq!(carousel_go_to(0, 4, 6), state.index());
        state.go_to(99);
        assert_eq!(carousel_go_to(4, 99, 6), state.index());
    }

    #[test]
    fn test_theme_resolution_matches_native() {
        assert_eq!(resolve_theme(None), "dark");
        assert_eq!(resolve_theme(Some("light".into())), "light");
        assert_eq!(resolve_theme(Some("dark".into())), "dark");
        assert_eq!(resolve_theme(Some("blue".into())), "dark");
    }
}
