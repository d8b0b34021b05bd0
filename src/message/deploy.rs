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
//! # Contract deployment

use super::envelope::ExternalMessageEnvelope;
use crate::{
    blockchain::{Address, ShardId},
    convert::error::ConversionError,
    error::Error,
};
use ethabi::{Contract, Token};
use std::fmt;

/// Salt length in bytes
pub const SALT_BYTES: usize = 32;

/// Salt of a deployment, a 32 bytes big-endian number
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Salt(pub [u8; SALT_BYTES]);

impl From<u64> for Salt {
    fn from(value: u64) -> Self {
        let mut salt = [0u8; SALT_BYTES];
        salt[SALT_BYTES - 8..].copy_from_slice(&value.to_be_bytes());
        Salt(salt)
    }
}

impl From<[u8; SALT_BYTES]> for Salt {
    fn from(value: [u8; SALT_BYTES]) -> Self {
        Salt(value)
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Salt(0x{})", hex::encode(self.0))
    }
}

/// What to deploy and where
#[derive(Clone, Debug)]
pub struct DeploymentIntent {
    pub salt: Salt,
    pub shard: ShardId,
    pub bytecode: Vec<u8>,
    /// Contract ABI, required to encode constructor arguments
    pub abi: Option<Contract>,
    pub args: Option<Vec<Token>>,
}

impl DeploymentIntent {
    pub fn new<S: Into<Salt>>(salt: S, shard: ShardId, bytecode: Vec<u8>) -> Self {
        DeploymentIntent {
            salt: salt.into(),
            shard,
            bytecode,
            abi: None,
            args: None,
        }
    }

    pub fn with_abi(mut self, abi: Contract) -> Self {
        self.abi = Some(abi);
        self
    }

    pub fn with_args(mut self, args: Vec<Token>) -> Self {
        self.args = Some(args);
        self
    }

    /// Bytecode followed by ABI-encoded constructor arguments, if any
    pub fn payload(&self) -> Result<Vec<u8>, Error> {
        let args = match &self.args {
            Some(args) => args,
            None => return Ok(self.bytecode.clone()),
        };
        let abi = self.abi.as_ref().ok_or_else(|| {
            Error::ConfigError("ABI is required to encode constructor arguments".to_string())
        })?;
        let constructor = abi.constructor().ok_or_else(|| {
            Error::ConfigError("ABI doesn't have a constructor".to_string())
        })?;
        constructor
            .encode_input(self.bytecode.clone(), args)
            .map_err(|e| ConversionError::from(e).into())
    }

    /// Address the contract is deployed to
    pub fn address(&self) -> Result<Address, Error> {
        Ok(Address::from_deployment(
            &self.salt.0,
            self.shard,
            &self.payload()?,
        ))
    }
}

/// Build an unsigned deployment message
pub fn external_deployment_message(
    intent: &DeploymentIntent,
    chain_id: u64,
) -> Result<ExternalMessageEnvelope, Error> {
    let payload = intent.payload()?;
    let to = Address::from_deployment(&intent.salt.0, intent.shard, &payload);
    debug!("Deployment to {} on shard {}", to, intent.shard);
    Ok(ExternalMessageEnvelope {
        is_deploy: true,
        to,
        chain_id,
        seqno: 0,
        data: payload,
        auth_data: Vec::new(),
    })
}
