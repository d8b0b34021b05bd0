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
extern crate emerald_nil as emerald;

use emerald::{
    keccak256, Address, Error, ExternalMessageEnvelope, LocalKeySigner, LocalKeySignerConfig,
    Signature, Signer,
};
use std::str::FromStr;

const KEY_ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
const PHRASE: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[tokio::test]
async fn should_sign_and_verify() {
    let signer = LocalKeySigner::new(LocalKeySignerConfig::with_private_key(KEY_ONE)).unwrap();
    let public_key = signer.public_key().await.unwrap();
    assert_eq!(
        hex::encode(public_key.to_bytes()),
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );

    let digest = keccak256(b"hello =nil;");
    let signature = signer.sign(&digest).await.unwrap();
    let bytes = signature.to_bytes();
    assert_eq!(bytes.len(), 65);
    assert!(signature.verify(&public_key, &digest));
    assert_eq!(signature.recover(&digest).unwrap(), public_key);

    let mut tampered = bytes;
    tampered[10] ^= 0x01;
    let tampered = Signature::try_from(&tampered).unwrap();
    assert!(!tampered.verify(&public_key, &digest));

    let mut other = digest;
    other[0] ^= 0x01;
    assert!(!signature.verify(&public_key, &other));
}

#[tokio::test]
async fn should_fail_verify_on_any_flipped_bit() {
    let signer = LocalKeySigner::new(LocalKeySignerConfig::with_private_key(KEY_ONE)).unwrap();
    let public_key = signer.public_key().await.unwrap();
    let digest = keccak256(b"fixed message");
    let signature = signer.sign(&digest).await.unwrap();

    for bit in 0..256 {
        let mut flipped = digest;
        flipped[bit / 8] ^= 1 << (bit % 8);
        assert!(!signature.verify(&public_key, &flipped), "bit {}", bit);
    }
}

#[tokio::test]
async fn should_sign_deterministic() {
    let signer = LocalKeySigner::new(LocalKeySignerConfig::with_private_key(KEY_ONE)).unwrap();
    let digest = keccak256(b"same input");
    assert_eq!(
        signer.sign(&digest).await.unwrap(),
        signer.sign(&digest).await.unwrap()
    );
}

#[tokio::test]
async fn should_derive_address_per_shard() {
    let signer = LocalKeySigner::new(LocalKeySignerConfig::with_private_key(KEY_ONE)).unwrap();
    assert_eq!(
        signer.address(1).await.unwrap(),
        Address::from_str("0x0001adcca06964c0dffdb3eae70e8666faa5a63d").unwrap()
    );
    let shard_2 = signer.address(2).await.unwrap();
    assert_eq!(shard_2.shard_id(), 2);
    assert_eq!(
        shard_2,
        Address::from_str("0x0002adcca06964c0dffdb3eae70e8666faa5a63d").unwrap()
    );
}

#[tokio::test]
async fn should_sign_with_mnemonic() {
    let from_phrase = LocalKeySigner::new(LocalKeySignerConfig::with_mnemonic(PHRASE)).unwrap();
    let from_key = LocalKeySigner::new(LocalKeySignerConfig::with_private_key(
        "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727",
    ))
    .unwrap();
    assert_eq!(
        from_phrase.public_key().await.unwrap(),
        from_key.public_key().await.unwrap()
    );
}

#[test]
fn should_require_single_key_source() {
    assert!(matches!(
        LocalKeySigner::new(LocalKeySignerConfig::default()),
        Err(Error::ConfigError(_))
    ));

    let both = LocalKeySignerConfig {
        private_key: Some(KEY_ONE.to_string()),
        mnemonic: Some(PHRASE.to_string()),
    };
    assert!(matches!(
        LocalKeySigner::new(both),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn should_reject_invalid_key() {
    assert!(matches!(
        LocalKeySigner::new(LocalKeySignerConfig::with_private_key(
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        )),
        Err(Error::InvalidKey(_))
    ));
    assert!(matches!(
        LocalKeySigner::new(LocalKeySignerConfig::with_private_key("0x01")),
        Err(Error::EncodingError(_))
    ));
}

#[tokio::test]
async fn should_authenticate_call() {
    let signer = LocalKeySigner::new(LocalKeySignerConfig::with_private_key(KEY_ONE)).unwrap();
    let to = signer.address(1).await.unwrap();
    let mut msg = ExternalMessageEnvelope::call(to, 0, 1, vec![0x06, 0x66, 0x1a, 0xbd]);
    msg.update_authdata(&signer).await.unwrap();

    let decoded = ExternalMessageEnvelope::decode(&msg.encode()).unwrap();
    assert_eq!(
        decoded.verify_authdata().unwrap(),
        signer.public_key().await.unwrap()
    );

    let mut forged = decoded.clone();
    forged.seqno = 2;
    assert_ne!(
        forged.verify_authdata().ok(),
        Some(signer.public_key().await.unwrap())
    );
}
