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
use std::{error, fmt};

/// Key material or signature failed curve checks
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CryptoError {
    /// Zero, or not below the curve order
    InvalidPrivateKey,
    /// Not a point on secp256k1
    InvalidPublicKey,
    /// Malformed or non-verifying signature
    InvalidSignature,
    /// Recovery id is not 0 or 1
    InvalidRecoveryId,
    /// HD derivation of a key failed
    KeyDerivation(String),
    /// Other error reported by the curve library
    Curve(String),
}

impl From<secp256k1::Error> for CryptoError {
    fn from(err: secp256k1::Error) -> Self {
        match err {
            secp256k1::Error::InvalidSecretKey => CryptoError::InvalidPrivateKey,
            secp256k1::Error::InvalidPublicKey => CryptoError::InvalidPublicKey,
            secp256k1::Error::InvalidSignature | secp256k1::Error::IncorrectSignature => {
                CryptoError::InvalidSignature
            }
            secp256k1::Error::InvalidRecoveryId => CryptoError::InvalidRecoveryId,
            other => CryptoError::Curve(other.to_string()),
        }
    }
}

impl From<bitcoin::util::bip32::Error> for CryptoError {
    fn from(err: bitcoin::util::bip32::Error) -> Self {
        CryptoError::KeyDerivation(err.to_string())
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CryptoError::InvalidPrivateKey => write!(f, "Invalid private key"),
            CryptoError::InvalidPublicKey => write!(f, "Invalid public key"),
            CryptoError::InvalidSignature => write!(f, "Invalid signature"),
            CryptoError::InvalidRecoveryId => write!(f, "Invalid recovery id"),
            CryptoError::KeyDerivation(msg) => write!(f, "Key derivation failed: {}", msg),
            CryptoError::Curve(msg) => write!(f, "secp256k1 error: {}", msg),
        }
    }
}

impl error::Error for CryptoError {}
