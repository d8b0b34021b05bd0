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
use crate::convert::error::ConversionError;

pub struct NilHex {}

///
/// Common utilities to encode and decode bytes in hex format used by the node API (i.e., with 0x prefix)
impl NilHex {

    /// Decode a `0x` prefixed hex string. The prefix is required.
    pub fn decode<S: AsRef<str>>(s: S) -> Result<Vec<u8>, ConversionError> {
        match s.as_ref().strip_prefix("0x") {
            Some(value) => hex::decode(value).map_err(ConversionError::from),
            None => Err(ConversionError::InvalidHex),
        }
    }

    /// Decode a hex string, with or without `0x` prefix
    pub fn decode_lenient<S: AsRef<str>>(s: S) -> Result<Vec<u8>, ConversionError> {
        let s = s.as_ref();
        let value = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(value).map_err(ConversionError::from)
    }

    /// Decode a hex string into a fixed size array
    pub fn decode_fixed<const N: usize>(field: &'static str, s: &str) -> Result<[u8; N], ConversionError> {
        let bytes = NilHex::decode_lenient(s)?;
        if bytes.len() != N {
            return Err(ConversionError::invalid_length(field, N, bytes.len()));
        }
        let mut result = [0u8; N];
        result.copy_from_slice(&bytes);
        Ok(result)
    }

    pub fn encode<T: AsRef<[u8]>>(n: T) -> String {
        format!("0x{}", hex::encode(n))
    }
}
