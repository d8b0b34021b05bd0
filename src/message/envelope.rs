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
    blockchain::{Address, MessageHash},
    convert::error::ConversionError,
    crypto::{CryptoError, PublicKey, Signature},
    error::Error,
    rpc::{PublicClient, Transport},
    signer::Signer,
    util::{keccak256, KECCAK256_BYTES},
};
use rlp::{Rlp, RlpStream};

/// Number of fields in the encoded envelope
const ENVELOPE_FIELDS: usize = 6;

/// External message with its authentication data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalMessageEnvelope {
    /// `data` is bytecode with constructor arguments if true, call data otherwise
    pub is_deploy: bool,
    pub to: Address,
    pub chain_id: u64,
    pub seqno: u64,
    pub data: Vec<u8>,
    /// Signature over the signing hash, empty until signed
    pub auth_data: Vec<u8>,
}

impl ExternalMessageEnvelope {
    /// Unsigned call of an existing account. `seqno` must be fresh from the node
    pub fn call(to: Address, chain_id: u64, seqno: u64, data: Vec<u8>) -> Self {
        ExternalMessageEnvelope {
            is_deploy: false,
            to,
            chain_id,
            seqno,
            data,
            auth_data: Vec::new(),
        }
    }

    pub fn is_signed(&self) -> bool {
        !self.auth_data.is_empty()
    }

    fn to_rlp_raw(&self) -> RlpStream {
        let mut data = RlpStream::new();
        data.begin_unbounded_list();

        data.append(&self.is_deploy);
        data.append(&self.to.0.as_ref());
        data.append(&self.chain_id);
        data.append(&self.seqno);
        data.append(&self.data);

        data
    }

    /// RLP list of all fields except the auth data
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut rlp = self.to_rlp_raw();
        rlp.finalize_unbounded_list();
        rlp.out().to_vec()
    }

    /// Hash signed by the account key
    pub fn signing_hash(&self) -> [u8; KECCAK256_BYTES] {
        keccak256(&self.signing_payload())
    }

    /// RLP packed message, in the form accepted by the node
    pub fn encode(&self) -> Vec<u8> {
        let mut rlp = self.to_rlp_raw();
        rlp.append(&self.auth_data);
        rlp.finalize_unbounded_list();
        rlp.out().to_vec()
    }

    /// Hash of the encoded message, as reported by the node
    pub fn hash(&self) -> MessageHash {
        MessageHash(keccak256(&self.encode()))
    }

    /// Parse a message produced by [`encode`](Self::encode)
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let rlp = Rlp::new(bytes);
        if !rlp.is_list() {
            return Err(ConversionError::InvalidRlp("message is not a list".to_string()).into());
        }
        let total = rlp.payload_info()?.total();
        if total != bytes.len() {
            return Err(ConversionError::InvalidRlp(format!(
                "{} trailing bytes",
                bytes.len().saturating_sub(total)
            ))
            .into());
        }
        let count = rlp.item_count()?;
        if count != ENVELOPE_FIELDS {
            return Err(ConversionError::InvalidRlp(format!(
                "expected {} fields, got {}",
                ENVELOPE_FIELDS, count
            ))
            .into());
        }

        let to: Vec<u8> = rlp.val_at(1)?;
        Ok(ExternalMessageEnvelope {
            is_deploy: rlp.val_at(0)?,
            to: Address::try_from(&to)?,
            chain_id: rlp.val_at(2)?,
            seqno: rlp.val_at(3)?,
            data: rlp.val_at(4)?,
            auth_data: rlp.val_at(5)?,
        })
    }

    /// Sign the message with the account key and attach the signature.
    ///
    /// Fails with `Error::AlreadySigned` if auth data is already present, the envelope is
    /// not modified in that case.
    pub async fn update_authdata<S>(&mut self, signer: &S) -> Result<(), Error>
    where
        S: Signer + ?Sized,
    {
        if self.is_signed() {
            return Err(Error::AlreadySigned);
        }
        let signature = signer.sign(&self.signing_hash()).await?;
        self.auth_data = signature.to_bytes().to_vec();
        debug!("Message to {} signed, seqno {}", self.to, self.seqno);
        Ok(())
    }

    /// Public key of the key holder who produced the auth data
    pub fn verify_authdata(&self) -> Result<PublicKey, Error> {
        if !self.is_signed() {
            return Err(CryptoError::InvalidSignature.into());
        }
        let signature = Signature::try_from(&self.auth_data)?;
        let hash = self.signing_hash();
        let public_key = signature.recover(&hash)?;
        if !signature.verify(&public_key, &hash) {
            return Err(CryptoError::InvalidSignature.into());
        }
        Ok(public_key)
    }

    /// Submit the encoded message to the node, returns the message hash
    pub async fn send<T: Transport>(&self, client: &PublicClient<T>) -> Result<MessageHash, Error> {
        client.send_raw_message(&self.encode()).await
    }
}
