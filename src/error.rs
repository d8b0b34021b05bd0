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
//! # Crate errors

use crate::{
    convert::error::ConversionError,
    crypto::error::CryptoError,
    rpc::error::RpcError,
};
use std::fmt;

/// Errors returned by the toolkit
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid or missing construction parameters
    ConfigError(String),
    /// Key material fails curve validity checks
    InvalidKey(CryptoError),
    /// Malformed hex or bytes at a boundary
    EncodingError(ConversionError),
    /// Failure reported by the node, transport or poller
    RemoteError(RpcError),
    /// Message already carries authentication data
    AlreadySigned,
}

impl std::convert::From<ConversionError> for Error {
    fn from(err: ConversionError) -> Self {
        Error::EncodingError(err)
    }
}

impl std::convert::From<CryptoError> for Error {
    fn from(err: CryptoError) -> Self {
        Error::InvalidKey(err)
    }
}

impl std::convert::From<RpcError> for Error {
    fn from(err: RpcError) -> Self {
        Error::RemoteError(err)
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::EncodingError(ConversionError::from(err))
    }
}

impl From<secp256k1::Error> for Error {
    fn from(err: secp256k1::Error) -> Self {
        Error::InvalidKey(CryptoError::from(err))
    }
}

impl From<rlp::DecoderError> for Error {
    fn from(err: rlp::DecoderError) -> Self {
        Error::EncodingError(ConversionError::from(err))
    }
}

impl From<ethabi::Error> for Error {
    fn from(err: ethabi::Error) -> Self {
        Error::EncodingError(ConversionError::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::EncodingError(ConversionError::from(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidKey(err) => write!(f, "Invalid key: {}", err),
            Error::EncodingError(err) => write!(f, "Encoding error: {}", err),
            Error::RemoteError(err) => write!(f, "Remote error: {}", err),
            Error::AlreadySigned => write!(f, "Message already has authentication data"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidKey(err) => Some(err),
            Error::EncodingError(err) => Some(err),
            Error::RemoteError(err) => Some(err),
            _ => None,
        }
    }
}
