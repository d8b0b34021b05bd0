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
//! # External messages
//!
//! Messages submitted from outside of the network to an account: a contract deployment or a
//! call. The envelope is signed by the holder of the destination's key, then RLP-encoded for
//! the node.

mod deploy;
mod envelope;

pub use self::{
    deploy::{external_deployment_message, DeploymentIntent, Salt, SALT_BYTES},
    envelope::ExternalMessageEnvelope,
};
