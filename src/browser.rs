//! Browser Glue
//!
//! Storage, dialogs and downloads through `web-sys`.

use resource_sync::{PreferenceStore, SyncError, SyncResult};
use wasm_bindgen::JsCast;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `PreferenceStore` over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> SyncResult<()> {
        let storage = local_storage().ok_or_else(|| SyncError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SyncError::Storage(format!("{:?}", e)))
    }
}

pub fn session_item(key: &str) -> Option<String> {
    web_sys::window()?
        .session_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

/// `window.confirm`; false if the dialog cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Offer `bytes` as a file download
pub fn download_bytes(bytes: &[u8], filename: &str) -> SyncResult<()> {
    let js_err = |e: wasm_bindgen::JsValue| SyncError::Storage(format!("{:?}", e));

    let window = web_sys::window().ok_or_else(|| SyncError::Storage("no window".into()))?;
    let document = window.document().ok_or_else(|| SyncError::Storage("no document".into()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SyncError::Storage("anchor element".into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Downloaded {} ({} bytes)", filename, bytes.len());
    Ok(())
}
