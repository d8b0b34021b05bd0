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
use crate::{
    convert::{error::ConversionError, hex::NilHex},
    util::KECCAK256_BYTES,
};
use std::{fmt, ops, str::FromStr};

/// Hash of an encoded message, identifies it on the node
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct MessageHash(pub [u8; KECCAK256_BYTES]);

impl ops::Deref for MessageHash {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; KECCAK256_BYTES]> for MessageHash {
    fn from(bytes: [u8; KECCAK256_BYTES]) -> Self {
        MessageHash(bytes)
    }
}

impl FromStr for MessageHash {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MessageHash(NilHex::decode_fixed("message hash", s)?))
    }
}

impl fmt::Display for MessageHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for MessageHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
