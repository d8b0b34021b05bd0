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
extern crate emerald_nil as emerald;

use async_trait::async_trait;
use emerald::{
    convert::NilHex,
    external_deployment_message,
    rpc::{wait_till_completed_with, BlockTag, PollConfig, RpcError, Transport},
    DeploymentIntent, ExternalMessageEnvelope, LocalKeySigner, LocalKeySignerConfig, PublicClient,
    Salt, Signer,
};
use serde_json::{json, Value};
use std::sync::Mutex;

/// Node stand-in: accepts messages, keeps per-account seqno, completes on the second poll
#[derive(Default)]
struct TestNode {
    received: Mutex<Vec<ExternalMessageEnvelope>>,
    polls: Mutex<u32>,
}

#[async_trait]
impl Transport for TestNode {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        match method {
            "eth_chainId" => Ok(json!("0x0")),
            "eth_getTransactionCount" => {
                let received = self.received.lock().unwrap();
                let to = params[0].as_str().unwrap_or_default().to_string();
                let count = received
                    .iter()
                    .filter(|m| !m.is_deploy && m.to.to_string() == to)
                    .count();
                Ok(json!(format!("0x{:x}", count)))
            }
            "eth_sendRawTransaction" => {
                let raw = NilHex::decode(params[0].as_str().unwrap_or_default())
                    .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
                let msg = ExternalMessageEnvelope::decode(&raw).map_err(|e| RpcError::Rpc {
                    code: -32602,
                    message: e.to_string(),
                })?;
                if !msg.is_deploy && msg.verify_authdata().is_err() {
                    return Err(RpcError::Rpc {
                        code: -32000,
                        message: "invalid signature".to_string(),
                    });
                }
                let hash = msg.hash().to_string();
                self.received.lock().unwrap().push(msg);
                Ok(json!(hash))
            }
            "eth_getInMessageReceipt" => {
                let mut polls = self.polls.lock().unwrap();
                *polls += 1;
                if *polls % 2 == 1 {
                    return Ok(Value::Null);
                }
                Ok(json!({"success": true, "messageHash": params[1], "shardId": params[0]}))
            }
            _ => Err(RpcError::Rpc {
                code: -32601,
                message: format!("method {} not found", method),
            }),
        }
    }
}

fn fast() -> PollConfig {
    PollConfig {
        interval_ms: 1,
        max_attempts: 5,
    }
}

#[tokio::test]
async fn should_deploy_and_call() {
    let _ = simple_logger::init_with_level(log::Level::Debug);

    let client = PublicClient::new(TestNode::default(), 1);
    let chain_id = client.chain_id().await.unwrap();

    let intent = DeploymentIntent::new(Salt::from(1234u64), 1, vec![0x60, 0x80]);
    let deploy = external_deployment_message(&intent, chain_id).unwrap();
    let hash = deploy.send(&client).await.unwrap();
    assert_eq!(hash, deploy.hash());

    let receipts = wait_till_completed_with(&client, 1, &hash, &fast())
        .await
        .unwrap();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].message_hash, hash);

    let signer = LocalKeySigner::new(LocalKeySignerConfig::with_private_key(
        "0x0000000000000000000000000000000000000000000000000000000000000001",
    ))
    .unwrap();
    let wallet = signer.address(1).await.unwrap();

    for expected_seqno in 0..2u64 {
        let seqno = client
            .get_message_count(&wallet, BlockTag::Latest)
            .await
            .unwrap();
        assert_eq!(seqno, expected_seqno);

        let mut call = ExternalMessageEnvelope::call(wallet, chain_id, seqno, vec![0x06, 0x66]);
        call.update_authdata(&signer).await.unwrap();
        call.send(&client).await.unwrap();
    }
    assert_eq!(client.transport().received.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn should_reject_unsigned_call() {
    let client = PublicClient::new(TestNode::default(), 1);
    let call = ExternalMessageEnvelope::call(
        "0x0001adcca06964c0dffdb3eae70e8666faa5a63d".parse().unwrap(),
        0,
        0,
        vec![],
    );
    assert_eq!(
        call.send(&client).await,
        Err(emerald::Error::RemoteError(RpcError::Rpc {
            code: -32000,
            message: "invalid signature".to_string()
        }))
    );
}
