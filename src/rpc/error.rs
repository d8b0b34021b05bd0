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
//! # JSON RPC module errors

use std::{error, fmt};

/// JSON RPC errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// Connection or HTTP level failure
    Transport(String),

    /// Error object returned by the node
    Rpc { code: i64, message: String },

    /// Response is not what the method returns
    InvalidResponse(String),

    /// Message is not completed after all polling attempts
    Timeout { attempts: u32 },
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        RpcError::Transport(err.to_string())
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RpcError::Transport(msg) => write!(f, "HTTP client error: {}", msg),
            RpcError::Rpc { code, message } => write!(f, "RPC error {}: {}", code, message),
            RpcError::InvalidResponse(msg) => write!(f, "Invalid RPC response: {}", msg),
            RpcError::Timeout { attempts } => {
                write!(f, "Message is not completed after {} attempts", attempts)
            }
        }
    }
}

impl error::Error for RpcError {}
