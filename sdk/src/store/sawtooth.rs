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

//! World state backed by a Sawtooth transaction context.
//!
//! Sawtooth stores values at 70 hex character Merkle addresses, so record ids are hashed into
//! the vendor finance namespace before they reach the validator. Sawtooth applies transactions
//! that touch the same address one after another, which is the ordering the existence gates in
//! the contract rely on.

use crypto::digest::Digest;
use crypto::sha2::Sha512;
use sawtooth_sdk::processor::handler::{ContextError, TransactionContext};

use super::{StateStore, StateStoreError};
use crate::error::ResourceTemporarilyUnavailableError;

/// First six hex characters of the SHA-512 of `vendor_finance`
pub const VENDOR_FINANCE_NAMESPACE: &str = "ecda75";

/// Computes the Merkle address a record id is stored at.
pub fn compute_state_address(key: &str) -> String {
    let mut sha = Sha512::new();
    sha.input(key.as_bytes());
    let hash_str = String::from(VENDOR_FINANCE_NAMESPACE) + &sha.result_str();
    hash_str[..70].to_string()
}

pub struct SawtoothStateStore<'a> {
    context: &'a dyn TransactionContext,
}

impl<'a> SawtoothStateStore<'a> {
    pub fn new(context: &'a dyn TransactionContext) -> Self {
        SawtoothStateStore { context }
    }
}

impl<'a> StateStore for SawtoothStateStore<'a> {
    fn get_state_entry(&self, key: &str) -> Result<Option<Vec<u8>>, StateStoreError> {
        let address = compute_state_address(key);
        debug!("Reading {} from {}", key, address);
        // An address that was never set comes back as empty data
        Ok(self
            .context
            .get_state_entry(&address)
            .map_err(to_store_error)?
            .filter(|data| !data.is_empty()))
    }

    fn set_state_entry(&self, key: String, value: Vec<u8>) -> Result<(), StateStoreError> {
        let address = compute_state_address(&key);
        debug!("Writing {} to {}", key, address);
        self.context
            .set_state_entry(address, value)
            .map_err(to_store_error)
    }
}

fn to_store_error(err: ContextError) -> StateStoreError {
    StateStoreError::ResourceTemporarilyUnavailableError(
        ResourceTemporarilyUnavailableError::with_message(format!(
            "Unable to reach validator state: {}",
            err
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    /// A MockTransactionContext that reports unset addresses as empty data, like a validator
    struct MockTransactionContext {
        state: RefCell<HashMap<String, Vec<u8>>>,
        offline: bool,
    }

    impl TransactionContext for MockTransactionContext {
        fn get_state_entries(
            &self,
            addresses: &[String],
        ) -> Result<Vec<(String, Vec<u8>)>, ContextError> {
            if self.offline {
                return Err(ContextError::ResponseAttributeError(
                    "validator offline".to_string(),
                ));
            }
            Ok(addresses
                .iter()
                .map(|addr| {
                    let data = self.state.borrow().get(addr).cloned().unwrap_or_default();
                    (addr.to_string(), data)
                })
                .collect())
        }

        fn set_state_entries(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), ContextError> {
            if self.offline {
                return Err(ContextError::ResponseAttributeError(
                    "validator offline".to_string(),
                ));
            }
            for (addr, data) in entries {
                self.state.borrow_mut().insert(addr, data);
            }
            Ok(())
        }

        /// this is not needed for these tests
        fn delete_state_entries(&self, _addresses: &[String]) -> Result<Vec<String>, ContextError> {
            unimplemented!()
        }

        /// this is not needed for these tests
        fn add_receipt_data(&self, _data: &[u8]) -> Result<(), ContextError> {
            unimplemented!()
        }

        /// this is not needed for these tests
        fn add_event(
            &self,
            _event_type: String,
            _attributes: Vec<(String, String)>,
            _data: &[u8],
        ) -> Result<(), ContextError> {
            unimplemented!()
        }
    }

    #[test]
    fn test_address_is_namespaced() {
        let address = compute_state_address("quote1");
        assert_eq!(address.len(), 70);
        assert!(address.starts_with(VENDOR_FINANCE_NAMESPACE));
        assert_ne!(address, compute_state_address("quote2"));
    }

    #[test]
    // 1. Test that an unset address reads as absent rather than as empty bytes
    // 2. Test that a written value is stored at the hashed address
    fn test_get_and_set() {
        let context = MockTransactionContext::default();
        let store = SawtoothStateStore::new(&context);

        assert_eq!(store.get_state_entry("quote1").unwrap(), None);
        assert!(!store.state_entry_exists("quote1").unwrap());

        store
            .set_state_entry("quote1".into(), b"{}".to_vec())
            .unwrap();
        assert_eq!(store.get_state_entry("quote1").unwrap(), Some(b"{}".to_vec()));
        assert!(context
            .state
            .borrow()
            .contains_key(&compute_state_address("quote1")));
    }

    #[test]
    fn test_context_failure_is_unavailable() {
        let context = MockTransactionContext {
            offline: true,
            ..Default::default()
        };
        let store = SawtoothStateStore::new(&context);

        match store.get_state_entry("quote1") {
            Err(StateStoreError::ResourceTemporarilyUnavailableError(_)) => (),
            other => panic!("expected an unavailable error, got {:?}", other),
        }
    }
}
