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

use std::error::Error;
use std::fmt;

use vendor_finance_sdk::codec::CodecError;
use vendor_finance_sdk::error::InternalError;
use vendor_finance_sdk::store::StateStoreError;
use vendor_finance_sdk::validation::ValidationError;

/// Every way a contract invocation can fail. All of them abort the invocation; nothing has been
/// written when one is returned.
#[derive(Debug)]
pub enum ContractError {
    /// A place or raise found a record already stored under the id
    AlreadyExists(String),
    /// An update or read found nothing stored under the id
    NotFound(String),
    /// The value stored under the id could not be decoded as the requested record
    MalformedRecord(String, CodecError),
    StoreUnavailable(StateStoreError),
    ValidationError(ValidationError),
    InvalidPayload(CodecError),
    InternalError(InternalError),
}

impl Error for ContractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ContractError::AlreadyExists(_) => None,
            ContractError::NotFound(_) => None,
            ContractError::MalformedRecord(_, err) => Some(err),
            ContractError::StoreUnavailable(err) => Some(err),
            ContractError::ValidationError(err) => Some(err),
            ContractError::InvalidPayload(err) => Some(err),
            ContractError::InternalError(err) => Some(err),
        }
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContractError::AlreadyExists(id) => write!(f, "the record {} already exists", id),
            ContractError::NotFound(id) => write!(f, "the record {} does not exist", id),
            ContractError::MalformedRecord(id, err) => {
                write!(f, "the record {} is malformed: {}", id, err)
            }
            ContractError::StoreUnavailable(err) => {
                write!(f, "failed to access world state: {}", err)
            }
            ContractError::ValidationError(err) => write!(f, "invalid record: {}", err),
            ContractError::InvalidPayload(err) => write!(f, "cannot build payload: {}", err),
            ContractError::InternalError(err) => err.fmt(f),
        }
    }
}

impl From<StateStoreError> for ContractError {
    fn from(err: StateStoreError) -> Self {
        ContractError::StoreUnavailable(err)
    }
}

impl From<ValidationError> for ContractError {
    fn from(err: ValidationError) -> Self {
        ContractError::ValidationError(err)
    }
}
