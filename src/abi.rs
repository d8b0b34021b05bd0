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
//! # Contract ABI encoding
//!
//! Thin layer over `ethabi` that maps its errors into the crate errors

use crate::{convert::error::ConversionError, error::Error};
pub use ethabi::{Contract, Token};

/// Parse a JSON ABI definition
pub fn load_abi(json: &str) -> Result<Contract, Error> {
    Contract::load(json.as_bytes()).map_err(|e| ConversionError::from(e).into())
}

/// Call data for function `name`: selector followed by encoded arguments
pub fn encode_function_data(abi: &Contract, name: &str, args: &[Token]) -> Result<Vec<u8>, Error> {
    let function = abi.function(name).map_err(ConversionError::from)?;
    let data = function.encode_input(args).map_err(ConversionError::from)?;
    Ok(data)
}

/// Decode the value returned by function `name`
pub fn decode_function_result(abi: &Contract, name: &str, data: &[u8]) -> Result<Vec<Token>, Error> {
    let function = abi.function(name).map_err(ConversionError::from)?;
    let tokens = function.decode_output(data).map_err(ConversionError::from)?;
    Ok(tokens)
}
