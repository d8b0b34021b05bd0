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
//! # Core domain logic module

pub mod address;
mod hash;

pub use self::{
    address::{Address, ShardId, ADDRESS_BYTES},
    hash::MessageHash,
};
use crate::{crypto::PublicKey, error::Error};

/// Address of an externally-owned account for a public key (compressed or uncompressed form)
pub fn derive_address_from_public_key(public_key: &[u8], shard_id: ShardId) -> Result<Address, Error> {
    let key = PublicKey::from_slice(public_key)?;
    Ok(Address::from_public_key(&key, shard_id))
}

/// Address of a contract deployed with `salt` to `shard_id`
pub fn derive_address_from_deployment(salt: &[u8; 32], shard_id: ShardId, payload: &[u8]) -> Address {
    Address::from_deployment(salt, shard_id, payload)
}
