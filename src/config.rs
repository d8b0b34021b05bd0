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
//! # Node connection parameters

use crate::{blockchain::ShardId, error::Error, rpc::PollConfig};
#[cfg(feature = "http")]
use crate::rpc::{HttpTransport, PublicClient};
use std::env;
#[cfg(feature = "http")]
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8529";
pub const DEFAULT_SHARD_ID: ShardId = 1;
/// Timeout of a single HTTP request
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Environment variable with the RPC endpoint
pub const ENV_ENDPOINT: &str = "NIL_RPC_ENDPOINT";
/// Environment variable with the default shard id
pub const ENV_SHARD_ID: &str = "NIL_SHARD_ID";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ClientConfig {
    pub endpoint: String,
    pub shard_id: ShardId,
    pub timeout_ms: u64,
    pub poll: PollConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            shard_id: DEFAULT_SHARD_ID,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll: PollConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: ClientConfig = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("Invalid client config: {}", e)))?;
        config.validate()
    }

    /// Defaults overridden by `NIL_RPC_ENDPOINT` and `NIL_SHARD_ID`
    pub fn from_env() -> Result<Self, Error> {
        ClientConfig::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();
        if let Some(endpoint) = var(ENV_ENDPOINT) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(shard) = var(ENV_SHARD_ID) {
            config.shard_id = shard.trim().parse().map_err(|_| {
                Error::ConfigError(format!("Invalid {}: {}", ENV_SHARD_ID, shard))
            })?;
        }
        config.validate()
    }

    fn validate(self) -> Result<Self, Error> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(Error::ConfigError(format!(
                "Invalid RPC endpoint: {}",
                self.endpoint
            )));
        }
        if self.timeout_ms == 0 {
            return Err(Error::ConfigError("Timeout must be positive".to_string()));
        }
        if self.poll.max_attempts == 0 {
            return Err(Error::ConfigError(
                "Poll attempts must be positive".to_string(),
            ));
        }
        Ok(self)
    }

    /// Client for the configured endpoint and shard
    #[cfg(feature = "http")]
    pub fn connect(&self) -> Result<PublicClient<HttpTransport>, Error> {
        let transport =
            HttpTransport::with_timeout(&self.endpoint, Duration::from_millis(self.timeout_ms))?;
        debug!("Connecting to {} shard {}", self.endpoint, self.shard_id);
        Ok(PublicClient::new(transport, self.shard_id))
    }
}
