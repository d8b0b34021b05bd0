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
use super::Signer;
use crate::{
    blockchain::{Address, ShardId},
    convert::error::ConversionError,
    crypto::{PrivateKey, PublicKey, Signature},
    error::Error,
    mnemonic::private_key_from_phrase,
    util::{to_arr, KECCAK256_BYTES},
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Mutex, OnceLock},
};

/// Source of the key for [`LocalKeySigner`], exactly one of the fields must be set
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalKeySignerConfig {
    /// Hex encoded private key, `0x` prefix is optional
    #[serde(default)]
    pub private_key: Option<String>,
    /// BIP39 phrase, the key is derived at `m/44'/60'/0'/0/0`.
    ///
    /// Only the word count is checked. Words are not looked up in the BIP39 wordlist and the
    /// checksum is not verified, so a mistyped word yields a different, valid key.
    #[serde(default)]
    pub mnemonic: Option<String>,
}

impl LocalKeySignerConfig {
    pub fn with_private_key<S: Into<String>>(private_key: S) -> Self {
        LocalKeySignerConfig {
            private_key: Some(private_key.into()),
            mnemonic: None,
        }
    }

    pub fn with_mnemonic<S: Into<String>>(mnemonic: S) -> Self {
        LocalKeySignerConfig {
            private_key: None,
            mnemonic: Some(mnemonic.into()),
        }
    }
}

impl fmt::Debug for LocalKeySignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LocalKeySignerConfig")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Signer holding a secp256k1 private key in memory
pub struct LocalKeySigner {
    private_key: PrivateKey,
    public_key: OnceLock<PublicKey>,
    addresses: Mutex<HashMap<ShardId, Address>>,
}

fn provided(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

impl LocalKeySigner {
    /// Create a signer; the key is validated here
    pub fn new(config: LocalKeySignerConfig) -> Result<Self, Error> {
        let private_key = match (provided(&config.private_key), provided(&config.mnemonic)) {
            (Some(pk), None) => PrivateKey::from_str(pk)?,
            (None, Some(phrase)) => private_key_from_phrase(phrase)?,
            (None, None) => {
                return Err(Error::ConfigError(
                    "Either private key or mnemonic must be provided".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(Error::ConfigError(
                    "Only one of private key or mnemonic must be provided".to_string(),
                ))
            }
        };
        debug!("Local signer created");
        Ok(LocalKeySigner::from(private_key))
    }

    fn cached_public_key(&self) -> PublicKey {
        *self.public_key.get_or_init(|| {
            let key = self.private_key.public_key();
            debug!("Public key computed: {}", key);
            key
        })
    }
}

impl From<PrivateKey> for LocalKeySigner {
    fn from(private_key: PrivateKey) -> Self {
        LocalKeySigner {
            private_key,
            public_key: OnceLock::new(),
            addresses: Mutex::new(HashMap::new()),
        }
    }
}

impl fmt::Debug for LocalKeySigner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LocalKeySigner")
            .field("public_key", &self.public_key.get())
            .finish()
    }
}

#[async_trait]
impl Signer for LocalKeySigner {
    async fn sign(&self, digest: &[u8]) -> Result<Signature, Error> {
        if digest.len() != KECCAK256_BYTES {
            return Err(
                ConversionError::invalid_length("digest", KECCAK256_BYTES, digest.len()).into(),
            );
        }
        let hash: [u8; KECCAK256_BYTES] = to_arr(digest);
        trace!("Sign digest 0x{}", hex::encode(hash));
        self.private_key.sign_hash(&hash)
    }

    async fn public_key(&self) -> Result<PublicKey, Error> {
        Ok(self.cached_public_key())
    }

    async fn address(&self, shard_id: ShardId) -> Result<Address, Error> {
        let mut addresses = self
            .addresses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(address) = addresses.get(&shard_id) {
            return Ok(*address);
        }
        let address = Address::from_public_key(&self.cached_public_key(), shard_id);
        debug!("Address for shard {} computed: {}", shard_id, address);
        addresses.insert(shard_id, address);
        Ok(address)
    }
}
