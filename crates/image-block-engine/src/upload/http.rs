use std::collections::BTreeMap;

use async_trait::async_trait;
use image_block_config::{Endpoints, ToolConfig};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde_json::{Map, Value};

use crate::upload::transport::{FileUpload, UploadError, UploadResponse, UploadTransport};

/// Posts uploads to the endpoints named in the tool config.
///
/// Files go out as multipart under the configured field name, urls as a JSON
/// body. Extra request data and headers are attached to both.
pub struct EndpointTransport {
    client: Client,
    endpoints: Endpoints,
    field: String,
    data: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
}

impl EndpointTransport {
    pub fn from_config(config: &ToolConfig) -> Self {
        Self {
            client: Client::new(),
            endpoints: config.endpoints.clone(),
            field: config.field.clone(),
            data: config.additional_request_data.clone(),
            headers: config.additional_request_headers.clone(),
        }
    }

    fn post(&self, endpoint: &str) -> RequestBuilder {
        self.headers
            .iter()
            .fold(self.client.post(endpoint), |request, (name, value)| {
                request.header(name.as_str(), value.as_str())
            })
    }

    async fn send(&self, request: RequestBuilder) -> Result<UploadResponse, UploadError> {
        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }
}

fn missing_endpoint(name: &str) -> UploadError {
    UploadError::Transport(format!("no `{name}` endpoint configured"))
}

#[async_trait(?Send)]
impl UploadTransport for EndpointTransport {
    async fn upload_by_file(&self, file: &FileUpload) -> Result<UploadResponse, UploadError> {
        let endpoint = self
            .endpoints
            .by_file
            .as_deref()
            .ok_or_else(|| missing_endpoint("byFile"))?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let form = self
            .data
            .iter()
            .fold(Form::new().part(self.field.clone(), part), |form, (k, v)| {
                form.text(k.clone(), v.clone())
            });

        self.send(self.post(endpoint).multipart(form)).await
    }

    async fn upload_by_url(&self, url: &str) -> Result<UploadResponse, UploadError> {
        let endpoint = self
            .endpoints
            .by_url
            .as_deref()
            .ok_or_else(|| missing_endpoint("byUrl"))?;

        let mut body: Map<String, Value> = self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        body.insert("url".to_string(), Value::String(url.to_string()));

        self.send(self.post(endpoint).json(&body)).await
    }
}
