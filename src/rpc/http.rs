/*
Copyright 2024 EmeraldPay, Inc

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
use super::{error::RpcError, types::JsonRpcResponse, Transport};
use crate::{config::DEFAULT_TIMEOUT_MS, error::Error};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

/// JSON RPC 2.0 over HTTP POST
pub struct HttpTransport {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
    id: AtomicU64,
}

impl HttpTransport {
    pub fn new<S: Into<String>>(url: S) -> Result<Self, Error> {
        HttpTransport::with_timeout(url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn with_timeout<S: Into<String>>(url: S, timeout: Duration) -> Result<Self, Error> {
        let url = url.into();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::ConfigError(format!("Invalid RPC endpoint: {}", url)));
        }
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(RpcError::from)?;
        Ok(HttpTransport {
            url,
            client,
            timeout,
            id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request_body(&self, method: &str, params: Value) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": self.id.fetch_add(1, Ordering::Relaxed),
            "method": method,
            "params": params,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let body = self.request_body(method, params);
        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Transport(format!("HTTP status {}", status)));
        }
        let response: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
        response.into_result()
    }
}
