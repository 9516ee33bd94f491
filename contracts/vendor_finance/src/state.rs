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

use vendor_finance_sdk::codec::{CodecError, FromBytes, IntoBytes};
use vendor_finance_sdk::error::InternalError;
use vendor_finance_sdk::protocol::StateRecord;
use vendor_finance_sdk::store::StateStore;

use crate::error::ContractError;

/// VendorFinanceState is in charge of getting and setting records in world state for one
/// invocation.
pub struct VendorFinanceState<'a> {
    store: &'a dyn StateStore,
}

impl<'a> VendorFinanceState<'a> {
    pub fn new(store: &'a dyn StateStore) -> VendorFinanceState<'a> {
        VendorFinanceState { store }
    }

    /// Returns whether any record, of any type, is stored under `key`.
    pub fn exists(&self, key: &str) -> Result<bool, ContractError> {
        Ok(self.store.state_entry_exists(key)?)
    }

    /// Gets the record stored under `key`.
    ///
    /// A value that does not decode as `T`, or that decodes to a record carrying a different
    /// id, is reported as malformed rather than absent. All three record types share a key
    /// space, and decoding refuses values written by another type.
    pub fn get_record<T>(&self, key: &str) -> Result<Option<T>, ContractError>
    where
        T: StateRecord + FromBytes<T>,
    {
        let packed = match self.store.get_state_entry(key)? {
            Some(packed) => packed,
            None => return Ok(None),
        };

        let record = T::from_bytes(&packed)
            .map_err(|err| ContractError::MalformedRecord(key.to_string(), err))?;

        if record.record_id() != key {
            return Err(ContractError::MalformedRecord(
                key.to_string(),
                CodecError::DeserializationError(format!(
                    "value is not a {} stored under its own id (found id \"{}\")",
                    T::RECORD_TYPE,
                    record.record_id()
                )),
            ));
        }

        Ok(Some(record))
    }

    /// Sets a record in state under its own id, replacing whatever is stored there.
    pub fn set_record<T>(&self, record: T) -> Result<(), ContractError>
    where
        T: StateRecord + IntoBytes,
    {
        let key = record.record_id().to_string();
        let serialized = record.into_bytes().map_err(|err| {
            ContractError::InternalError(InternalError::from_source_with_context(
                Box::new(err),
                format!("Cannot serialize {}", T::RECORD_TYPE),
            ))
        })?;

        self.store.set_state_entry(key, serialized)?;
        Ok(())
    }
}
