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

//! Byte encoding of records and payloads.
//!
//! Values are written to world state as JSON objects keyed by field name. Decoding tolerates
//! fields it does not know about and fills absent ones with their defaults, so records written
//! before a field was added still decode.

use std::error::Error as StdError;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::protocol::StateRecord;

#[derive(Debug)]
pub enum CodecError {
    SerializationError(String),
    DeserializationError(String),
}

impl StdError for CodecError {}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            CodecError::SerializationError(ref s) => write!(f, "SerializationError: {}", s),
            CodecError::DeserializationError(ref s) => write!(f, "DeserializationError: {}", s),
        }
    }
}

pub trait FromBytes<T>: Sized {
    fn from_bytes(bytes: &[u8]) -> Result<T, CodecError>;
}

pub trait IntoBytes: Sized {
    fn into_bytes(self) -> Result<Vec<u8>, CodecError>;
}

pub(crate) fn to_json_bytes<T: Serialize>(
    value: &T,
    type_name: &str,
) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(value).map_err(|err| {
        CodecError::SerializationError(format!("Unable to get bytes from {}: {}", type_name, err))
    })
}

pub(crate) fn from_json_bytes<T: DeserializeOwned>(
    bytes: &[u8],
    type_name: &str,
) -> Result<T, CodecError> {
    serde_json::from_slice(bytes).map_err(|err| {
        CodecError::DeserializationError(format!("Unable to get {} from bytes: {}", type_name, err))
    })
}

/// Decodes a record read from world state.
///
/// Every record type shares one key space and absent fields decode to defaults, so the value
/// must carry the type's own id field and none of the fields only another type carries.
pub(crate) fn from_record_bytes<T>(bytes: &[u8]) -> Result<T, CodecError>
where
    T: StateRecord + DeserializeOwned,
{
    let value: Value = from_json_bytes(bytes, T::RECORD_TYPE)?;

    let fields = value.as_object().ok_or_else(|| {
        CodecError::DeserializationError(format!(
            "Unable to get {} from bytes: value is not an object",
            T::RECORD_TYPE
        ))
    })?;
    if !fields.contains_key(T::ID_FIELD) {
        return Err(CodecError::DeserializationError(format!(
            "Unable to get {} from bytes: missing field '{}'",
            T::RECORD_TYPE,
            T::ID_FIELD
        )));
    }
    if let Some(foreign) = T::FOREIGN_FIELDS
        .iter()
        .find(|field| fields.contains_key(**field))
    {
        return Err(CodecError::DeserializationError(format!(
            "Unable to get {} from bytes: field '{}' belongs to another record type",
            T::RECORD_TYPE,
            foreign
        )));
    }

    serde_json::from_value(value).map_err(|err| {
        CodecError::DeserializationError(format!(
            "Unable to get {} from bytes: {}",
            T::RECORD_TYPE,
            err
        ))
    })
}
