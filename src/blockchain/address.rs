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
//! # Shard-qualified account address (20 bytes)
//!
//! First 2 bytes are the shard id (big-endian), the rest is the tail of a Keccak-256 digest

use crate::{
    convert::{error::ConversionError, hex::NilHex},
    crypto::PublicKey,
    util::{keccak256, to_arr},
};
use std::{fmt, ops, str::FromStr};

/// Fixed bytes number to represent `Address`
pub const ADDRESS_BYTES: usize = 20;

/// Bytes of the shard prefix
const SHARD_BYTES: usize = 2;

/// Shard identifier
pub type ShardId = u16;

/// Account address (20 bytes)
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_BYTES]);

impl Address {
    /// Try to convert a byte vector to `Address`.
    ///
    /// # Arguments
    ///
    /// * `data` - A byte slice with `ADDRESS_BYTES` length
    ///
    /// # Example
    ///
    /// ```
    /// let addr = emerald_nil::Address::try_from(&[0u8; emerald_nil::ADDRESS_BYTES]).unwrap();
    /// assert_eq!(addr.to_string(), "0x0000000000000000000000000000000000000000");
    /// ```
    pub fn try_from(data: &[u8]) -> Result<Self, ConversionError> {
        if data.len() != ADDRESS_BYTES {
            return Err(ConversionError::invalid_length(
                "address",
                ADDRESS_BYTES,
                data.len(),
            ));
        }

        Ok(Address(to_arr(data)))
    }

    /// Shard the address belongs to
    pub fn shard_id(&self) -> ShardId {
        u16::from_be_bytes([self.0[0], self.0[1]])
    }

    /// Address of an externally-owned account, `keccak256(compressed key)`
    pub fn from_public_key(public_key: &PublicKey, shard_id: ShardId) -> Address {
        Address::with_shard(shard_id, &keccak256(&public_key.to_bytes()))
    }

    /// Address of a contract, `keccak256(salt ‖ shard_id ‖ payload)`.
    /// `payload` is the bytecode with encoded constructor arguments, if any.
    pub fn from_deployment(salt: &[u8; 32], shard_id: ShardId, payload: &[u8]) -> Address {
        let mut buf = Vec::with_capacity(32 + SHARD_BYTES + payload.len());
        buf.extend_from_slice(salt);
        buf.extend_from_slice(&shard_id.to_be_bytes());
        buf.extend_from_slice(payload);
        Address::with_shard(shard_id, &keccak256(&buf))
    }

    fn with_shard(shard_id: ShardId, hash: &[u8; 32]) -> Address {
        let mut value = [0u8; ADDRESS_BYTES];
        value[0..SHARD_BYTES].copy_from_slice(&shard_id.to_be_bytes());
        value[SHARD_BYTES..].copy_from_slice(&hash[32 - (ADDRESS_BYTES - SHARD_BYTES)..]);
        Address(value)
    }
}

impl ops::Deref for Address {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Address> for ethabi::Token {
    fn from(value: Address) -> Self {
        ethabi::Token::Address(ethabi::Address::from(value.0))
    }
}

impl FromStr for Address {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Address(NilHex::decode_fixed("address", s)?))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
