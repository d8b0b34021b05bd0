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
//! # Module to work with mnemonic codes
//!
//! Mnemonic codes as defined by `BIP39`
//! [BIP39](https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)
//!
//! Keys are derived from the seed with `BIP32` at [`DEFAULT_HD_PATH`]

mod error;

pub use self::error::Error;
use crate::crypto::{PrivateKey, SECP256K1};
use bitcoin::{
    util::bip32::{DerivationPath, ExtendedPrivKey},
    Network,
};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;
use std::str::FromStr;

/// Count of iterations for `pbkdf2`
const PBKDF2_ROUNDS: u32 = 2048;

/// Size of a BIP39 seed in bytes
pub const SEED_BYTES: usize = 64;

/// Derivation path of the first account key
pub const DEFAULT_HD_PATH: &str = "m/44'/60'/0'/0/0";

/// Mnemonic phrase
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<String>,
}

/// Standard sizes of a phrase
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct MnemonicSize {
    bits_length: usize,
    checksum_length: usize,
}

impl MnemonicSize {
    pub fn from_length(words: usize) -> Result<MnemonicSize, Error> {
        match words {
            12 => Ok(MnemonicSize {
                bits_length: 128,
                checksum_length: 4,
            }),
            15 => Ok(MnemonicSize {
                bits_length: 160,
                checksum_length: 5,
            }),
            18 => Ok(MnemonicSize {
                bits_length: 192,
                checksum_length: 6,
            }),
            21 => Ok(MnemonicSize {
                bits_length: 224,
                checksum_length: 7,
            }),
            24 => Ok(MnemonicSize {
                bits_length: 256,
                checksum_length: 8,
            }),
            _ => Err(Error::MnemonicError(format!(
                "Invalid mnemonic size: {}",
                words
            ))),
        }
    }

    pub fn words_count(&self) -> usize {
        (self.bits_length + self.checksum_length) / 11
    }

    pub fn entropy_bytes_length(&self) -> usize {
        self.bits_length / 8
    }
}

impl Mnemonic {
    /// Convert a string into `Mnemonic`.
    ///
    /// # Arguments
    ///
    /// * `src` - A mnemonic sentence of 12, 15, 18, 21 or 24 words
    ///
    /// Only the number of words is validated. Words outside of the BIP39 wordlist and a wrong
    /// checksum are accepted and produce a different seed.
    ///
    pub fn try_from(src: &str) -> Result<Self, Error> {
        let w: Vec<String> = src.split_whitespace().map(|w| w.to_lowercase()).collect();

        match w.len() {
            0 => Err(Error::MnemonicError("empty initial sentence".to_string())),
            l => {
                MnemonicSize::from_length(l)?;
                Ok(Mnemonic { words: w })
            }
        }
    }

    /// Convert mnemonic to single string
    pub fn sentence(&self) -> String {
        self.words.join(" ")
    }

    pub fn words_count(&self) -> usize {
        self.words.len()
    }

    /// Get seed from mnemonic sentence
    ///
    /// # Arguments:
    ///
    /// * password - password for seed generation
    ///
    pub fn seed(&self, password: Option<&str>) -> [u8; SEED_BYTES] {
        let salt = match password {
            Some(p) => format!("mnemonic{}", p),
            None => "mnemonic".to_string(),
        };

        let mut result = [0u8; SEED_BYTES];
        pbkdf2::<Hmac<Sha512>>(
            self.sentence().as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut result,
        );
        result
    }

    /// Derive a private key at the given HD path, without a seed password
    pub fn private_key(&self, hd_path: &str) -> Result<PrivateKey, Error> {
        let path = DerivationPath::from_str(hd_path)?;
        let master = ExtendedPrivKey::new_master(Network::Bitcoin, &self.seed(None))?;
        let key = master.derive_priv(&SECP256K1, &path)?;
        Ok(PrivateKey::from(key.private_key))
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Mnemonic({} words)", self.words.len())
    }
}

/// Private key for the first account of a phrase, at [`DEFAULT_HD_PATH`]
pub fn private_key_from_phrase(phrase: &str) -> Result<PrivateKey, Error> {
    Mnemonic::try_from(phrase)?.private_key(DEFAULT_HD_PATH)
}
