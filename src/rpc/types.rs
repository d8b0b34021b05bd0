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
//! # Payloads of the node API

use super::error::RpcError;
use crate::{
    blockchain::{Address, MessageHash, ShardId},
    convert::json::{hex_bytes, quantity},
    util::to_quantity,
};
use serde_json::Value;

/// Block to run a query against
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockTag {
    Latest,
    Earliest,
    Pending,
    Number(u64),
}

impl Default for BlockTag {
    fn default() -> Self {
        BlockTag::Latest
    }
}

impl From<BlockTag> for Value {
    fn from(tag: BlockTag) -> Self {
        match tag {
            BlockTag::Latest => Value::from("latest"),
            BlockTag::Earliest => Value::from("earliest"),
            BlockTag::Pending => Value::from("pending"),
            BlockTag::Number(n) => Value::from(to_quantity(n)),
        }
    }
}

/// Read-only call of a contract
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
}

/// Incoming message as stored by the node
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub hash: MessageHash,
    #[serde(default)]
    pub from: Option<Address>,
    pub to: Address,
    #[serde(default, with = "quantity")]
    pub seqno: u64,
    #[serde(default, with = "hex_bytes")]
    pub data: Vec<u8>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Result of message execution, with receipts of the messages it sent
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub success: bool,
    pub message_hash: MessageHash,
    #[serde(default)]
    pub shard_id: ShardId,
    #[serde(default)]
    pub contract_address: Option<Address>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub out_messages: Option<Vec<MessageHash>>,
    #[serde(default)]
    pub out_receipts: Option<Vec<Option<Receipt>>>,
}

impl Receipt {
    /// True when every outgoing message, at any depth, has its receipt
    pub fn is_complete(&self) -> bool {
        let sent = self.out_messages.as_ref().map_or(0, |m| m.len());
        match &self.out_receipts {
            None => sent == 0,
            Some(receipts) => {
                receipts.len() >= sent
                    && receipts
                        .iter()
                        .all(|r| r.as_ref().map_or(false, Receipt::is_complete))
            }
        }
    }

    /// This receipt followed by the nested ones, depth-first
    pub fn flatten(&self) -> Vec<Receipt> {
        let mut all = Vec::new();
        self.flatten_into(&mut all);
        all
    }

    fn flatten_into(&self, all: &mut Vec<Receipt>) {
        let mut head = self.clone();
        head.out_receipts = None;
        all.push(head);
        if let Some(receipts) = &self.out_receipts {
            for receipt in receipts.iter().flatten() {
                receipt.flatten_into(all);
            }
        }
    }
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// JSON RPC 2.0 response envelope
#[derive(Deserialize)]
pub(crate) struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            Some(err) => Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            }),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}
