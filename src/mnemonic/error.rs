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
//! # Mnemonic phrase errors

use crate::crypto::error::CryptoError;
use std::{error, fmt};

/// `Mnemonic` parsing and key derivation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Mnemonic sentence is malformed
    MnemonicError(String),

    /// BIP32 key generation error
    KeyGenerationError(String),
}

impl From<bitcoin::util::bip32::Error> for Error {
    fn from(err: bitcoin::util::bip32::Error) -> Self {
        Error::KeyGenerationError(err.to_string())
    }
}

impl From<Error> for crate::error::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::MnemonicError(msg) => crate::error::Error::ConfigError(msg),
            Error::KeyGenerationError(msg) => {
                crate::error::Error::InvalidKey(CryptoError::KeyDerivation(msg))
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MnemonicError(ref str) => write!(f, "Mnemonic error: {}", str),
            Error::KeyGenerationError(ref str) => write!(f, "BIP32 generation error: {}", str),
        }
    }
}

impl error::Error for Error {}
