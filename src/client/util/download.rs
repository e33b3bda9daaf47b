use hotelfix::error::ExportError;

/// Hand a generated file to the user.
///
/// In the browser this clicks a temporary link to a Blob URL; on desktop the file is written
/// to the working directory.
#[cfg(target_arch = "wasm32")]
pub fn download(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let js_error = |_| ExportError::Download("browser refused the download".to_string());

    let data = js_sys::Uint8Array::from(bytes);
    let sequence = js_sys::Array::of1(&data);
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&sequence, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document available".to_string()))?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("failed to create link".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_error)?;

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download(file_name: &str, _mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
    use dioxus_logger::tracing;

    std::fs::write(file_name, bytes).map_err(|e| ExportError::Download(e.to_string()))?;
    tracing::info!(file = %file_name, "Export written");

    Ok(())
}
