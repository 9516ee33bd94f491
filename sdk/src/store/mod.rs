// Copyright 2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The world state boundary.
//!
//! Everything the contract knows about the hosting ledger goes through [`StateStore`]: read a
//! value by key and write a value by key. Consensus, replication and commit ordering stay with
//! whoever implements the trait.

mod memory;
#[cfg(feature = "sawtooth")]
pub mod sawtooth;

use std::error::Error;
use std::fmt;

use crate::error::{InternalError, ResourceTemporarilyUnavailableError};

pub use memory::{MemoryStateStore, MemoryStateTransaction};

/// Key-value access to world state for a single invocation.
///
/// Methods take `&self`; implementations that buffer or forward writes use interior mutability,
/// the same way a ledger transaction context does.
pub trait StateStore {
    /// Returns the bytes stored under `key`, or `None` if nothing is.
    fn get_state_entry(&self, key: &str) -> Result<Option<Vec<u8>>, StateStoreError>;

    /// Stores `value` under `key`, replacing anything already there.
    fn set_state_entry(&self, key: String, value: Vec<u8>) -> Result<(), StateStoreError>;

    /// Returns whether a value is stored under `key`.
    fn state_entry_exists(&self, key: &str) -> Result<bool, StateStoreError> {
        Ok(self.get_state_entry(key)?.is_some())
    }
}

#[derive(Debug)]
pub enum StateStoreError {
    InternalError(InternalError),
    ResourceTemporarilyUnavailableError(ResourceTemporarilyUnavailableError),
}

impl Error for StateStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StateStoreError::InternalError(err) => Some(err),
            StateStoreError::ResourceTemporarilyUnavailableError(err) => Some(err),
        }
    }
}

impl fmt::Display for StateStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StateStoreError::InternalError(err) => err.fmt(f),
            StateStoreError::ResourceTemporarilyUnavailableError(err) => err.fmt(f),
        }
    }
}

impl From<InternalError> for StateStoreError {
    fn from(err: InternalError) -> Self {
        StateStoreError::InternalError(err)
    }
}

impl From<ResourceTemporarilyUnavailableError> for StateStoreError {
    fn from(err: ResourceTemporarilyUnavailableError) -> Self {
        StateStoreError::ResourceTemporarilyUnavailableError(err)
    }
}
