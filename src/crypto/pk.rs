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
use super::{error::CryptoError, signature::Signature, SECP256K1};
use crate::{
    convert::{error::ConversionError, hex::NilHex},
    error::Error,
    util::KECCAK256_BYTES,
};
use rand::{rngs::OsRng, Rng};
use secp256k1::{Message, SecretKey};
use std::{fmt, str};

/// Private key length in bytes
pub const PRIVATE_KEY_BYTES: usize = 32;

/// Compressed public key length in bytes
pub const PUBLIC_KEY_COMPRESSED_BYTES: usize = 33;

/// Uncompressed public key length in bytes
pub const PUBLIC_KEY_UNCOMPRESSED_BYTES: usize = 65;

/// Private key used as x in an ECDSA signature.
/// Always a valid secp256k1 scalar.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Generate a new `PrivateKey` at random (`rand::OsRng`)
    pub fn gen() -> Self {
        Self::gen_custom(&mut OsRng)
    }

    /// Generate a new `PrivateKey` with given custom random generator
    pub fn gen_custom<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PrivateKey(SecretKey::new(rng))
    }

    /// Try to convert a byte slice into `PrivateKey`.
    ///
    /// # Arguments
    ///
    /// * `data` - A byte slice with `PRIVATE_KEY_BYTES` length
    ///
    /// # Example
    ///
    /// ```
    /// let mut data = [0u8; emerald_nil::PRIVATE_KEY_BYTES];
    /// data[31] = 1;
    /// let pk = emerald_nil::PrivateKey::try_from(&data).unwrap();
    /// assert_eq!(pk.to_string(),
    ///            "0x0000000000000000000000000000000000000000000000000000000000000001");
    /// ```
    pub fn try_from(data: &[u8]) -> Result<Self, Error> {
        if data.len() != PRIVATE_KEY_BYTES {
            return Err(
                ConversionError::invalid_length("private key", PRIVATE_KEY_BYTES, data.len())
                    .into(),
            );
        }
        let key = SecretKey::from_slice(data).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(PrivateKey(key))
    }

    /// Raw bytes of the secret scalar
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_BYTES] {
        self.0.secret_bytes()
    }

    /// Public key for the current private key
    pub fn public_key(&self) -> PublicKey {
        PublicKey(secp256k1::PublicKey::from_secret_key(&SECP256K1, &self.0))
    }

    /// Sign a 32 bytes digest. Deterministic (RFC 6979) and always low-S.
    pub fn sign_hash(&self, hash: &[u8; KECCAK256_BYTES]) -> Result<Signature, Error> {
        let msg = Message::from_slice(hash).map_err(CryptoError::from)?;
        let signature = SECP256K1.sign_ecdsa_recoverable(&msg, &self.0);
        let (rid, data) = signature.serialize_compact();

        let mut sig = Signature::default();
        sig.r.copy_from_slice(&data[0..32]);
        sig.s.copy_from_slice(&data[32..64]);
        sig.v = rid.to_i32() as u8;
        Ok(sig)
    }
}

impl From<SecretKey> for PrivateKey {
    fn from(key: SecretKey) -> Self {
        PrivateKey(key)
    }
}

impl str::FromStr for PrivateKey {
    type Err = Error;

    /// Accepts hex with or without `0x` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = NilHex::decode_fixed::<PRIVATE_KEY_BYTES>("private key", s.trim())?;
        PrivateKey::try_from(&data)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.secret_bytes()))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PrivateKey(<redacted>)")
    }
}

/// Public key, a point on secp256k1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(secp256k1::PublicKey);

impl PublicKey {
    /// Parse compressed (33 bytes) or uncompressed (65 bytes) form
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        match data.len() {
            PUBLIC_KEY_COMPRESSED_BYTES | PUBLIC_KEY_UNCOMPRESSED_BYTES => {
                let key = secp256k1::PublicKey::from_slice(data)
                    .map_err(|_| CryptoError::InvalidPublicKey)?;
                Ok(PublicKey(key))
            }
            other => Err(ConversionError::invalid_length(
                "public key",
                PUBLIC_KEY_COMPRESSED_BYTES,
                other,
            )
            .into()),
        }
    }

    /// Compressed form, `02`/`03` prefix and the x coordinate
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_COMPRESSED_BYTES] {
        self.0.serialize()
    }

    /// Uncompressed form, `04` prefix and both coordinates
    pub fn to_uncompressed(&self) -> [u8; PUBLIC_KEY_UNCOMPRESSED_BYTES] {
        self.0.serialize_uncompressed()
    }

    pub(crate) fn as_secp(&self) -> &secp256k1::PublicKey {
        &self.0
    }
}

impl From<secp256k1::PublicKey> for PublicKey {
    fn from(key: secp256k1::PublicKey) -> Self {
        PublicKey(key)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", NilHex::encode(self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use std::str::FromStr;

    #[test]
    fn should_sign_hash() {
        let key = PrivateKey::try_from(&to_32bytes(
            "3c9229289a6125f7fdf1885a77bb12c37a8d3b4962d936f7e3084dece32a3ca1",
        ))
        .unwrap();

        let s = key
            .sign_hash(&to_32bytes(
                "82ff40c0a986c6a5cfad4ddf4c3aa6996f1a7837f9c398e17e5de5cbd5a12b28",
            ))
            .unwrap();

        assert_eq!(s.v, 0);
        assert_eq!(
            s.r,
            to_32bytes("99e71a99cb2270b8cac5254f9e99b6210c6c10224a1579cf389ef88b20a1abe9")
        );
        assert_eq!(
            s.s,
            to_32bytes("129ff05af364204442bdb53ab6f18a99ab48acc9326fa689f228040429e3ca66")
        );
    }

    #[test]
    fn should_sign_deterministically() {
        let key = PrivateKey::gen();
        let hash = to_32bytes("1f483adb4a0f8c53d0ff8b6df23bbeae846815e7a52bac234edeaeb082b8d51a");
        assert_eq!(
            key.sign_hash(&hash).unwrap(),
            key.sign_hash(&hash).unwrap()
        );
    }

    #[test]
    fn should_parse_with_and_without_prefix() {
        let a = PrivateKey::from_str(
            "0x3c9229289a6125f7fdf1885a77bb12c37a8d3b4962d936f7e3084dece32a3ca1",
        )
        .unwrap();
        let b = PrivateKey::from_str(
            "3c9229289a6125f7fdf1885a77bb12c37a8d3b4962d936f7e3084dece32a3ca1",
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.to_string(),
            "0x3c9229289a6125f7fdf1885a77bb12c37a8d3b4962d936f7e3084dece32a3ca1"
        );
    }

    #[test]
    fn should_reject_invalid_hex() {
        assert!(matches!(
            PrivateKey::from_str("0xzz"),
            Err(Error::EncodingError(ConversionError::InvalidHex))
        ));
    }

    #[test]
    fn should_reject_key_over_curve_order() {
        let err = PrivateKey::from_str(
            "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        )
        .unwrap_err();
        assert_eq!(err, Error::InvalidKey(CryptoError::InvalidPrivateKey));
    }

    #[test]
    fn should_not_print_secret() {
        let key = PrivateKey::gen();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(&hex::encode(key.to_bytes())));
    }

    #[test]
    fn should_parse_public_key_forms() {
        let key = PrivateKey::gen().public_key();
        assert_eq!(PublicKey::from_slice(&key.to_bytes()).unwrap(), key);
        assert_eq!(PublicKey::from_slice(&key.to_uncompressed()).unwrap(), key);
        assert!(PublicKey::from_slice(&[2u8; 20]).is_err());
    }
}
