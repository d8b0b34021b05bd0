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
use super::{
    error::RpcError,
    types::{BlockTag, CallRequest, MessageRecord, Receipt},
    ClientMethod, Transport,
};
use crate::{
    blockchain::{Address, MessageHash, ShardId},
    convert::hex::NilHex,
    error::Error,
    util::from_quantity,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Typed access to the node API of a shard
pub struct PublicClient<T: Transport> {
    transport: T,
    shard_id: ShardId,
}

impl<T: Transport> PublicClient<T> {
    pub fn new(transport: T, shard_id: ShardId) -> Self {
        PublicClient { transport, shard_id }
    }

    /// Shard used by [`PublicClient::wait_till_completed`]
    pub fn shard_id(&self) -> ShardId {
        self.shard_id
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn request(&self, method: ClientMethod, params: Value) -> Result<Value, Error> {
        trace!("RPC {} {}", method.as_str(), params);
        let result = self.transport.request(method.as_str(), params).await;
        if let Err(err) = &result {
            debug!("RPC {} failed: {}", method.as_str(), err);
        }
        Ok(result?)
    }

    async fn request_as<R: DeserializeOwned>(
        &self,
        method: ClientMethod,
        params: Value,
    ) -> Result<R, Error> {
        let value = self.request(method, params).await?;
        serde_json::from_value(value).map_err(|e| {
            RpcError::InvalidResponse(format!("{}: {}", method.as_str(), e)).into()
        })
    }

    /// Submit an encoded message, returns the hash assigned by the node
    pub async fn send_raw_message(&self, data: &[u8]) -> Result<MessageHash, Error> {
        let hash: MessageHash = self
            .request_as(ClientMethod::SendRawMessage, json!([NilHex::encode(data)]))
            .await?;
        debug!("Message {} accepted by shard {}", hash, self.shard_id);
        Ok(hash)
    }

    /// Current seqno of the account, i.e. the one expected in its next external message
    pub async fn get_message_count(&self, address: &Address, block: BlockTag) -> Result<u64, Error> {
        let value = self
            .request(
                ClientMethod::GetMessageCount,
                json!([address, Value::from(block)]),
            )
            .await?;
        parse_quantity(ClientMethod::GetMessageCount, &value)
    }

    pub async fn get_message_by_hash(
        &self,
        hash: &MessageHash,
        shard_id: ShardId,
    ) -> Result<Option<MessageRecord>, Error> {
        self.request_as(ClientMethod::GetInMessageByHash, json!([shard_id, hash]))
            .await
    }

    /// Receipt of a processed message, `None` while the message is pending
    pub async fn get_message_receipt_by_hash(
        &self,
        hash: &MessageHash,
        shard_id: ShardId,
    ) -> Result<Option<Receipt>, Error> {
        self.request_as(ClientMethod::GetInMessageReceipt, json!([shard_id, hash]))
            .await
    }

    /// Execute a read-only call and return its output
    pub async fn call(&self, call: &CallRequest, block: BlockTag) -> Result<Vec<u8>, Error> {
        let value = self
            .request(ClientMethod::Call, json!([call, Value::from(block)]))
            .await?;
        match value.as_str() {
            Some(s) => NilHex::decode(s).map_err(Error::from),
            None => Err(RpcError::InvalidResponse(format!(
                "{}: expected hex string, got {}",
                ClientMethod::Call.as_str(),
                value
            ))
            .into()),
        }
    }

    pub async fn chain_id(&self) -> Result<u64, Error> {
        let value = self.request(ClientMethod::ChainId, json!([])).await?;
        parse_quantity(ClientMethod::ChainId, &value)
    }
}

fn parse_quantity(method: ClientMethod, value: &Value) -> Result<u64, Error> {
    let parsed = match value {
        Value::String(s) => from_quantity(s),
        Value::Number(n) => n.as_u64(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        RpcError::InvalidResponse(format!("{}: invalid quantity {}", method.as_str(), value)).into()
    })
}
