use reqwasm::http::{Method as HttpMethod, Request};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::error::ApiError;
use crate::service::transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, MultipartPart, RequestBody,
};

/// Browser transport backed by `fetch`
#[derive(Clone, Copy, Default)]
pub struct ReqwasmTransport;

impl HttpTransport for ReqwasmTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = Request::new(&request.url).method(method(request.method));

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            // The browser sets the multipart boundary header itself
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

fn method(method: Method) -> HttpMethod {
    match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    }
}

fn form_data(parts: Vec<MultipartPart>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;

    for part in parts {
        let bytes = js_sys::Uint8Array::from(part.bytes.as_slice());
        let sequence = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&part.content_type);
        let blob =
            Blob::new_with_u8_array_sequence_and_options(&sequence, &options).map_err(js_error)?;

        match &part.file_name {
            Some(file_name) => form
                .append_with_blob_and_filename(&part.name, &blob, file_name)
                .map_err(js_error)?,
            None => form.append_with_blob(&part.name, &blob).map_err(js_error)?,
        }
    }

    Ok(form)
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| "Failed to build form data".to_string()),
    )
}
