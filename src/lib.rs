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
//! # Signing toolkit for sharded =nil; networks
//!
//! Builds external messages (contract deployments and calls), signs them with a
//! [`Signer`](signer::Signer), encodes them for the wire and tracks them until completion
//! through a JSON-RPC node.
//!
//! Waiting for completion sleeps between polls on the Tokio 1.x timer, so it must run inside a
//! Tokio runtime with the time driver enabled.
//!
//! ```no_run
//! # async fn run() -> Result<(), emerald_nil::Error> {
//! use emerald_nil::{
//!     message::{external_deployment_message, DeploymentIntent, ExternalMessageEnvelope, Salt},
//!     rpc::BlockTag,
//!     signer::{LocalKeySigner, LocalKeySignerConfig},
//!     wait_till_completed, ClientConfig,
//! };
//!
//! let client = ClientConfig::from_env()?.connect()?;
//! let chain_id = client.chain_id().await?;
//!
//! let intent = DeploymentIntent::new(Salt::from(1234u64), 1, vec![0x60, 0x80]);
//! let deploy = external_deployment_message(&intent, chain_id)?;
//! let hash = deploy.send(&client).await?;
//! client.wait_till_completed(&hash).await?;
//!
//! let signer = LocalKeySigner::new(LocalKeySignerConfig::with_private_key(
//!     "0x0000000000000000000000000000000000000000000000000000000000000001",
//! ))?;
//! let seqno = client.get_message_count(&deploy.to, BlockTag::Latest).await?;
//! let mut call = ExternalMessageEnvelope::call(deploy.to, chain_id, seqno, vec![0x06, 0x66, 0x1a, 0xbd]);
//! call.update_authdata(&signer).await?;
//! let receipts = wait_till_completed(&client, client.shard_id(), &call.send(&client).await?).await?;
//! assert!(receipts.iter().all(|r| r.success));
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

pub mod abi;
pub mod blockchain;
pub mod config;
pub mod convert;
pub mod crypto;
pub mod error;
pub mod message;
pub mod mnemonic;
pub mod rpc;
pub mod signer;
mod util;

pub use self::{
    blockchain::{
        derive_address_from_deployment, derive_address_from_public_key, Address, MessageHash,
        ShardId, ADDRESS_BYTES,
    },
    config::ClientConfig,
    crypto::{
        derive_public_key, generate_random_private_key, PrivateKey, PublicKey, Signature,
        PRIVATE_KEY_BYTES, SIGNATURE_BYTES,
    },
    error::Error,
    message::{external_deployment_message, DeploymentIntent, ExternalMessageEnvelope, Salt},
    rpc::{wait_till_completed, PublicClient},
    signer::{LocalKeySigner, LocalKeySignerConfig, Signer},
    util::{keccak256, KECCAK256_BYTES},
};

#[cfg(test)]
mod tests {
    pub use crate::util::tests::*;
}
