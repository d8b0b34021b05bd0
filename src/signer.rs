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
//! # Signers of external messages
//!
//! A signer owns exactly one private key. All operations are async so a signer backed by
//! a hardware device or a remote service can suspend while it waits.

mod local;

pub use self::local::{LocalKeySigner, LocalKeySignerConfig};
use crate::{
    blockchain::{Address, ShardId},
    crypto::{PublicKey, Signature},
    error::Error,
};
use async_trait::async_trait;

/// Capability to sign digests with a single key
#[async_trait]
pub trait Signer: Send + Sync {
    /// Sign a 32 bytes digest, producing a 65 bytes `r ‖ s ‖ v` signature
    async fn sign(&self, digest: &[u8]) -> Result<Signature, Error>;

    /// Public key of the signer
    async fn public_key(&self) -> Result<PublicKey, Error>;

    /// Address of the signer's account on the given shard
    async fn address(&self, shard_id: ShardId) -> Result<Address, Error>;
}
