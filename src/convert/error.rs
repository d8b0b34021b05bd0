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

/// Malformed input at a byte or text boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Not a hex string, or missing `0x` prefix where it's required
    InvalidHex,
    /// Value has a wrong byte width
    InvalidLength {
        /// Name of the field being converted
        field: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Received length in bytes
        actual: usize,
    },
    /// Invalid RLP structure
    InvalidRlp(String),
    /// ABI encoding or decoding failed
    InvalidAbi(String),
    /// Invalid JSON value
    InvalidJson(String),
}

impl ConversionError {
    /// Shortcut for `InvalidLength`
    pub fn invalid_length(field: &'static str, expected: usize, actual: usize) -> Self {
        ConversionError::InvalidLength {
            field,
            expected,
            actual,
        }
    }
}

impl From<hex::FromHexError> for ConversionError {
    fn from(_: hex::FromHexError) -> Self {
        ConversionError::InvalidHex
    }
}

impl From<rlp::DecoderError> for ConversionError {
    fn from(err: rlp::DecoderError) -> Self {
        ConversionError::InvalidRlp(err.to_string())
    }
}

impl From<ethabi::Error> for ConversionError {
    fn from(err: ethabi::Error) -> Self {
        ConversionError::InvalidAbi(err.to_string())
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::InvalidJson(err.to_string())
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::InvalidHex => write!(f, "Invalid hex string"),
            ConversionError::InvalidLength {
                field,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length of {}: expected {} bytes, got {}",
                field, expected, actual
            ),
            ConversionError::InvalidRlp(msg) => write!(f, "Invalid RLP: {}", msg),
            ConversionError::InvalidAbi(msg) => write!(f, "ABI codec error: {}", msg),
            ConversionError::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
        }
    }
}

impl error::Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_field_in_message() {
        let err = ConversionError::invalid_length("address", 20, 19);
        assert_eq!(
            err.to_string(),
            "Invalid length of address: expected 20 bytes, got 19"
        );
    }

    #[test]
    fn should_convert_hex_error() {
        let err = hex::decode("0").unwrap_err();
        assert_eq!(ConversionError::from(err), ConversionError::InvalidHex);
    }
}
