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
//! # JSON RPC module
//!
//! Client side of the node API: message submission, lookups and completion polling

mod client;
pub mod error;
#[cfg(feature = "http")]
mod http;
mod poll;
pub mod types;

pub use self::{
    client::PublicClient,
    error::RpcError,
    poll::{wait_till_completed, wait_till_completed_with, PollConfig},
    types::{BlockTag, CallRequest, MessageRecord, Receipt},
};
#[cfg(feature = "http")]
pub use self::http::HttpTransport;
use async_trait::async_trait;
use serde_json::Value;

/// Delivers a JSON RPC request to the node and returns the `result` member of the response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError>;
}

/// RPC methods
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ClientMethod {
    /// Submit an encoded external message
    SendRawMessage,

    /// Sequence number of an account
    GetMessageCount,

    /// Incoming message by its hash
    GetInMessageByHash,

    /// Receipt of an incoming message by its hash
    GetInMessageReceipt,

    /// Read-only call of a contract
    Call,

    /// Chain id of the network
    ChainId,
}

impl ClientMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientMethod::SendRawMessage => "eth_sendRawTransaction",
            ClientMethod::GetMessageCount => "eth_getTransactionCount",
            ClientMethod::GetInMessageByHash => "eth_getInMessageByHash",
            ClientMethod::GetInMessageReceipt => "eth_getInMessageReceipt",
            ClientMethod::Call => "eth_call",
            ClientMethod::ChainId => "eth_chainId",
        }
    }
}
