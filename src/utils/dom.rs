//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Storage, Url, Window};

use crate::config::OBJECT_URL_REVOKE_MS;
use crate::core::error::ClipboardError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

// =============================================================================
// Clipboard
// =============================================================================

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let clipboard = window()
        .map(|w| w.navigator().clipboard())
        .ok_or(ClipboardError::Unavailable)?;

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(drop)
        .map_err(|e| {
            ClipboardError::WriteRejected(e.as_string().unwrap_or_else(|| "rejected".to_string()))
        })
}

// =============================================================================
// Blobs
// =============================================================================

fn object_url(bytes: &[u8], mime: &str) -> Option<String> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    Url::create_object_url_with_blob(&blob).ok()
}

/// Save `bytes` as a download named `file_name`.
///
/// The anchor is attached to the document for the click. The object URL is
/// revoked after `OBJECT_URL_REVOKE_MS` so the browser can start the save.
/// Returns `false` if the browser refused to create the download.
pub fn save_blob(bytes: &[u8], mime: &str, file_name: &str) -> bool {
    let Some(url) = object_url(bytes, mime) else {
        return false;
    };

    let clicked = window()
        .and_then(|w| w.document())
        .and_then(|d| {
            let body = d.body()?;
            let anchor = d.create_element("a").ok()?.dyn_into::<HtmlAnchorElement>().ok()?;
            Some((body, anchor))
        })
        .and_then(|(body, anchor)| {
            anchor.set_href(&url);
            anchor.set_download(file_name);
            body.append_child(&anchor).ok()?;
            anchor.click();
            anchor.remove();
            Some(())
        })
        .is_some();

    Timeout::new(OBJECT_URL_REVOKE_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    clicked
}

/// Open `bytes` in a new browser tab.
///
/// The object URL is not revoked: the new tab still needs it.
pub fn open_blob(bytes: &[u8], mime: &str) -> bool {
    let Some(url) = object_url(bytes, mime) else {
        return false;
    };

    window()
        .and_then(|w| w.open_with_url_and_target(&url, "_blank").ok())
        .flatten()
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_revoke_is_deferred() {
        assert!(OBJECT_URL_REVOKE_MS >= 1000);
    }
}
