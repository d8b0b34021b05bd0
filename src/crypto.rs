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
//! # Key material and ECDSA signatures using the SECG curve secp256k1

pub mod error;
mod pk;
mod signature;

pub use self::{
    error::CryptoError,
    pk::{
        PrivateKey, PublicKey, PRIVATE_KEY_BYTES, PUBLIC_KEY_COMPRESSED_BYTES,
        PUBLIC_KEY_UNCOMPRESSED_BYTES,
    },
    signature::{Signature, SIGNATURE_BYTES},
};
use crate::error::Error;
use secp256k1::{All, Secp256k1};

lazy_static! {
    pub(crate) static ref SECP256K1: Secp256k1<All> = Secp256k1::new();
}

/// Derive public key for a raw private key.
///
/// # Arguments
///
/// * `private_key` - 32 bytes of the secret scalar
/// * `compressed` - produce 33 bytes compressed form if true, 65 bytes otherwise
pub fn derive_public_key(private_key: &[u8], compressed: bool) -> Result<Vec<u8>, Error> {
    let pk = PrivateKey::try_from(private_key)?;
    let public = pk.public_key();
    if compressed {
        Ok(public.to_bytes().to_vec())
    } else {
        Ok(public.to_uncompressed().to_vec())
    }
}

/// Generate a new private key with the OS random source
pub fn generate_random_private_key() -> PrivateKey {
    PrivateKey::gen()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::error::ConversionError;

    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
        483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn key_one() -> [u8; 32] {
        let mut key = [0u8; 32];
        key[31] = 1;
        key
    }

    #[test]
    fn should_derive_compressed() {
        let public = derive_public_key(&key_one(), true).unwrap();
        assert_eq!(hex::encode(public), G_COMPRESSED);
    }

    #[test]
    fn should_derive_uncompressed() {
        let public = derive_public_key(&key_one(), false).unwrap();
        assert_eq!(public.len(), 65);
        assert_eq!(hex::encode(public), G_UNCOMPRESSED);
    }

    #[test]
    fn should_reject_zero_key() {
        let err = derive_public_key(&[0u8; 32], true).unwrap_err();
        assert_eq!(err, Error::InvalidKey(CryptoError::InvalidPrivateKey));
    }

    #[test]
    fn should_reject_short_key() {
        let err = derive_public_key(&[1u8; 31], true).unwrap_err();
        assert_eq!(
            err,
            Error::EncodingError(ConversionError::invalid_length("private key", 32, 31))
        );
    }

    #[test]
    fn should_generate_different_keys() {
        let a = generate_random_private_key();
        let b = generate_random_private_key();
        assert_ne!(a.to_bytes(), b.to_bytes());
    }
}
