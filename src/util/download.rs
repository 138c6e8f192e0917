//! Blob/object-URL glue for the QR image endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential and location-QR endpoints return raw PNG bytes; pages
//! display them through short-lived object URLs and offer a download via a
//! temporary anchor element. Browser-only; SSR paths no-op.

/// Build an object URL for PNG bytes, or `None` outside a browser.
pub fn png_object_url(bytes: &[u8]) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array.buffer());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bytes;
        None
    }
}

/// Trigger a browser download of `url` under `file_name`.
pub fn trigger_download(url: &str, file_name: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(element) = document.create_element("a") else {
            return;
        };
        let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return;
        };
        anchor.set_href(url);
        anchor.set_download(file_name);
        anchor.click();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, file_name);
    }
}
