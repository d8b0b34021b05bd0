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
use super::{error::CryptoError, pk::PublicKey, SECP256K1};
use crate::{
    convert::{error::ConversionError, hex::NilHex},
    error::Error,
    util::KECCAK256_BYTES,
};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message,
};
use std::fmt;

/// ECDSA signature length in bytes
pub const SIGNATURE_BYTES: usize = 65;

/// Recoverable ECDSA signature, serialized as `r ‖ s ‖ v`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signature {
    /// ECDSA signature first point (0 < r < secp256k1n)
    pub r: [u8; 32],

    /// ECDSA signature second point (0 < s < secp256k1n ÷ 2 + 1)
    pub s: [u8; 32],

    /// Recovery id, 0 or 1
    pub v: u8,
}

impl Signature {
    /// Parse 65 bytes in `r ‖ s ‖ v` layout
    pub fn try_from(data: &[u8]) -> Result<Self, Error> {
        if data.len() != SIGNATURE_BYTES {
            return Err(
                ConversionError::invalid_length("signature", SIGNATURE_BYTES, data.len()).into(),
            );
        }
        if data[64] > 1 {
            return Err(CryptoError::InvalidRecoveryId.into());
        }
        let mut sig = Signature::default();
        sig.r.copy_from_slice(&data[0..32]);
        sig.s.copy_from_slice(&data[32..64]);
        sig.v = data[64];
        Ok(sig)
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_BYTES] {
        let mut buf = [0u8; SIGNATURE_BYTES];
        buf[0..32].copy_from_slice(&self.r);
        buf[32..64].copy_from_slice(&self.s);
        buf[64] = self.v;
        buf
    }

    fn compact(&self) -> [u8; 64] {
        let mut buf = [0u8; 64];
        buf[0..32].copy_from_slice(&self.r);
        buf[32..64].copy_from_slice(&self.s);
        buf
    }

    /// Recover public key of the signer of `hash`
    pub fn recover(&self, hash: &[u8; KECCAK256_BYTES]) -> Result<PublicKey, Error> {
        let msg = Message::from_slice(hash).map_err(CryptoError::from)?;
        let rid = RecoveryId::from_i32(self.v as i32).map_err(CryptoError::from)?;
        let sig = RecoverableSignature::from_compact(&self.compact(), rid)
            .map_err(CryptoError::from)?;
        let key = SECP256K1
            .recover_ecdsa(&msg, &sig)
            .map_err(CryptoError::from)?;
        Ok(PublicKey::from(key))
    }

    /// Check the signature of `hash` against a public key
    pub fn verify(&self, public_key: &PublicKey, hash: &[u8; KECCAK256_BYTES]) -> bool {
        let msg = match Message::from_slice(hash) {
            Ok(msg) => msg,
            Err(_) => return false,
        };
        match secp256k1::ecdsa::Signature::from_compact(&self.compact()) {
            Ok(sig) => SECP256K1
                .verify_ecdsa(&msg, &sig, public_key.as_secp())
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", NilHex::encode(self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{crypto::PrivateKey, tests::*};

    #[test]
    fn should_keep_layout() {
        let mut data = [0u8; SIGNATURE_BYTES];
        data[0] = 0xaa;
        data[32] = 0xbb;
        data[64] = 1;
        let sig = Signature::try_from(&data).unwrap();
        assert_eq!(sig.r[0], 0xaa);
        assert_eq!(sig.s[0], 0xbb);
        assert_eq!(sig.v, 1);
        assert_eq!(sig.to_bytes(), data);
    }

    #[test]
    fn should_reject_wrong_length() {
        assert_eq!(
            Signature::try_from(&[0u8; 64]),
            Err(Error::EncodingError(ConversionError::invalid_length(
                "signature",
                65,
                64
            )))
        );
    }

    #[test]
    fn should_reject_recovery_id() {
        let mut data = [0u8; SIGNATURE_BYTES];
        data[64] = 27;
        assert_eq!(
            Signature::try_from(&data),
            Err(Error::InvalidKey(CryptoError::InvalidRecoveryId))
        );
    }

    #[test]
    fn should_recover_signer() {
        let key = PrivateKey::gen();
        let hash = to_32bytes("82ff40c0a986c6a5cfad4ddf4c3aa6996f1a7837f9c398e17e5de5cbd5a12b28");
        let sig = key.sign_hash(&hash).unwrap();
        assert_eq!(sig.recover(&hash).unwrap(), key.public_key());
    }

    #[test]
    fn should_verify_and_fail_on_modified() {
        let key = PrivateKey::gen();
        let mut hash =
            to_32bytes("82ff40c0a986c6a5cfad4ddf4c3aa6996f1a7837f9c398e17e5de5cbd5a12b28");
        let sig = key.sign_hash(&hash).unwrap();
        assert!(sig.verify(&key.public_key(), &hash));

        hash[0] ^= 0x01;
        assert!(!sig.verify(&key.public_key(), &hash));
    }

    #[test]
    fn should_not_verify_with_other_key() {
        let key = PrivateKey::gen();
        let hash = to_32bytes("1f483adb4a0f8c53d0ff8b6df23bbeae846815e7a52bac234edeaeb082b8d51a");
        let sig = key.sign_hash(&hash).unwrap();
        assert!(!sig.verify(&PrivateKey::gen().public_key(), &hash));
    }
}
