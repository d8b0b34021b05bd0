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
use super::{client::PublicClient, error::RpcError, types::Receipt, Transport};
use crate::{
    blockchain::{MessageHash, ShardId},
    error::Error,
};
use std::time::Duration;

/// How often and how long to wait for a message to complete
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PollConfig {
    pub interval_ms: u64,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            interval_ms: 1000,
            max_attempts: 120,
        }
    }
}

/// Wait until the message and all messages it spawned have receipts.
///
/// Returns the receipts flattened depth-first, starting with the receipt of `hash`.
/// A failed receipt is returned as is, check `success` of each.
///
/// Waiting between polls needs a Tokio 1.x runtime. Without one the call fails with
/// `Error::ConfigError` as soon as it has to wait.
///
/// # Panics
///
/// If the current Tokio runtime was built without the time driver (`enable_time`).
pub async fn wait_till_completed<T: Transport>(
    client: &PublicClient<T>,
    shard_id: ShardId,
    hash: &MessageHash,
) -> Result<Vec<Receipt>, Error> {
    wait_till_completed_with(client, shard_id, hash, &PollConfig::default()).await
}

/// Same as [`wait_till_completed`] with explicit polling parameters
pub async fn wait_till_completed_with<T: Transport>(
    client: &PublicClient<T>,
    shard_id: ShardId,
    hash: &MessageHash,
    config: &PollConfig,
) -> Result<Vec<Receipt>, Error> {
    for attempt in 1..=config.max_attempts {
        match client.get_message_receipt_by_hash(hash, shard_id).await? {
            Some(receipt) if receipt.is_complete() => {
                debug!("Message {} completed after {} attempts", hash, attempt);
                return Ok(receipt.flatten());
            }
            Some(_) => trace!("Message {} has pending outgoing messages", hash),
            None => trace!("Message {} is not processed yet", hash),
        }
        if attempt < config.max_attempts {
            pause(config.interval_ms).await?;
        }
    }
    warn!(
        "Message {} is not completed after {} attempts",
        hash, config.max_attempts
    );
    Err(RpcError::Timeout {
        attempts: config.max_attempts,
    }
    .into())
}

async fn pause(interval_ms: u64) -> Result<(), Error> {
    if tokio::runtime::Handle::try_current().is_err() {
        return Err(Error::ConfigError(
            "Waiting for a message requires a Tokio runtime".to_string(),
        ));
    }
    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    Ok(())
}

impl<T: Transport> PublicClient<T> {
    /// [`wait_till_completed`] on the shard of this client
    pub async fn wait_till_completed(&self, hash: &MessageHash) -> Result<Vec<Receipt>, Error> {
        wait_till_completed(self, self.shard_id(), hash).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{tests::MockTransport, ClientMethod};
    use futures::executor::block_on;
    use serde_json::{json, Value};

    const HASH: &str = "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";
    const OUT: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

    fn fast(max_attempts: u32) -> PollConfig {
        PollConfig {
            interval_ms: 1,
            max_attempts,
        }
    }

    fn partial() -> Value {
        json!({"success": true, "messageHash": HASH, "outMessages": [OUT], "outReceipts": [null]})
    }

    fn complete() -> Value {
        json!({
            "success": true,
            "messageHash": HASH,
            "outMessages": [OUT],
            "outReceipts": [{"success": false, "messageHash": OUT, "errorMessage": "out of gas"}]
        })
    }

    #[tokio::test]
    async fn should_wait_for_all_receipts() {
        let transport = MockTransport::default()
            .on(ClientMethod::GetInMessageReceipt, Value::Null)
            .on(ClientMethod::GetInMessageReceipt, partial())
            .on(ClientMethod::GetInMessageReceipt, complete());
        let client = PublicClient::new(transport, 1);
        let hash: MessageHash = HASH.parse().unwrap();

        let receipts = wait_till_completed_with(&client, 1, &hash, &fast(10))
            .await
            .unwrap();

        assert_eq!(receipts.len(), 2);
        assert_eq!(receipts[0].message_hash, hash);
        assert!(receipts[0].success);
        assert!(!receipts[1].success);
        assert_eq!(receipts[1].error_message, Some("out of gas".to_string()));
        assert_eq!(
            client
                .transport()
                .calls_of(ClientMethod::GetInMessageReceipt)
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn should_time_out() {
        let client = PublicClient::new(
            MockTransport::default().on(ClientMethod::GetInMessageReceipt, Value::Null),
            1,
        );
        let hash: MessageHash = HASH.parse().unwrap();

        assert_eq!(
            wait_till_completed_with(&client, 1, &hash, &fast(3)).await,
            Err(Error::RemoteError(RpcError::Timeout { attempts: 3 }))
        );
        assert_eq!(
            client
                .transport()
                .calls_of(ClientMethod::GetInMessageReceipt)
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn should_stop_on_node_error() {
        let client = PublicClient::new(
            MockTransport::default().on_result(
                ClientMethod::GetInMessageReceipt,
                Err(RpcError::Transport("connection refused".to_string())),
            ),
            1,
        );
        let hash: MessageHash = HASH.parse().unwrap();

        assert_eq!(
            wait_till_completed_with(&client, 1, &hash, &fast(5)).await,
            Err(Error::RemoteError(RpcError::Transport(
                "connection refused".to_string()
            )))
        );
    }

    #[test]
    fn should_fail_to_wait_outside_of_runtime() {
        let client = PublicClient::new(
            MockTransport::default().on(ClientMethod::GetInMessageReceipt, Value::Null),
            1,
        );
        let hash: MessageHash = HASH.parse().unwrap();

        let result = block_on(wait_till_completed_with(&client, 1, &hash, &fast(3)));
        assert!(matches!(result, Err(Error::ConfigError(_))));
        assert_eq!(
            client
                .transport()
                .calls_of(ClientMethod::GetInMessageReceipt)
                .len(),
            1
        );
    }

    #[test]
    fn should_complete_outside_of_runtime_without_waiting() {
        let client = PublicClient::new(
            MockTransport::default().on(ClientMethod::GetInMessageReceipt, complete()),
            1,
        );
        let hash: MessageHash = HASH.parse().unwrap();

        let receipts = block_on(wait_till_completed_with(&client, 1, &hash, &fast(3))).unwrap();
        assert_eq!(receipts.len(), 2);
    }

    #[tokio::test]
    async fn should_wait_on_client_shard() {
        let client = PublicClient::new(
            MockTransport::default()
                .on(ClientMethod::GetInMessageReceipt, Value::Null)
                .on(ClientMethod::GetInMessageReceipt, complete()),
            3,
        );
        let hash: MessageHash = HASH.parse().unwrap();

        let receipts = client.wait_till_completed(&hash).await.unwrap();
        assert_eq!(receipts[0].message_hash, hash);
        assert_eq!(
            client.transport().calls_of(ClientMethod::GetInMessageReceipt),
            vec![json!([3, HASH]), json!([3, HASH])]
        );
    }

    #[test]
    fn should_read_config_with_defaults() {
        let config: PollConfig = serde_json::from_str(r#"{"intervalMs": 250}"#).unwrap();
        assert_eq!(
            config,
            PollConfig {
                interval_ms: 250,
                max_attempts: 120
            }
        );
    }
}
