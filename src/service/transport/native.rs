use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};

use crate::error::ApiError;
use crate::service::transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, MultipartPart, RequestBody,
};

/// Native transport used by the desktop client and the integration tests
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self.client.request(method(request.method), &request.url);

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
            RequestBody::Multipart(parts) => builder.multipart(form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn form(parts: Vec<MultipartPart>) -> Result<Form, ApiError> {
    let mut form = Form::new();

    for part in parts {
        let mut field = Part::bytes(part.bytes)
            .mime_str(&part.content_type)
            .map_err(|e| ApiError::Transport(format!("Invalid content type: {}", e)))?;

        if let Some(file_name) = part.file_name {
            field = field.file_name(file_name);
        }

        form = form.part(part.name, field);
    }

    Ok(form)
}
