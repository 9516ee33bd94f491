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

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, ThreadId};

use super::{StateStore, StateStoreError};
use crate::error::InternalError;

/// An in-memory world state.
///
/// Clones share the same entries. Each direct call on the store takes the lock on its own, so
/// two invocations running side by side may interleave between an existence check and the
/// write that follows it. Run an invocation inside [`MemoryStateStore::begin_transaction`] to
/// keep other invocations out until it commits or rolls back.
#[derive(Clone, Default)]
pub struct MemoryStateStore {
    inner: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    // thread holding an open transaction, if any
    txn_owner: Arc<Mutex<Option<ThreadId>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        MemoryStateStore::default()
    }

    /// Locks the store for one invocation.
    ///
    /// Writes made through the returned transaction are buffered and visible only to it until
    /// [`MemoryStateTransaction::commit`]. Dropping the transaction discards them.
    ///
    /// Other threads calling the store wait until the transaction ends. The thread that holds
    /// the transaction must go through it: a direct call on the store, or a second
    /// `begin_transaction`, from that thread returns an `InternalError`.
    pub fn begin_transaction(&self) -> Result<MemoryStateTransaction<'_>, StateStoreError> {
        let entries = self.lock()?;
        *self.txn_owner.lock().map_err(|_| poisoned())? = Some(thread::current().id());
        Ok(MemoryStateTransaction {
            entries,
            pending: RefCell::new(HashMap::new()),
            owner: &self.txn_owner,
        })
    }

    /// Number of keys currently committed
    pub fn len(&self) -> Result<usize, StateStoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StateStoreError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, StateStoreError> {
        let owner = *self.txn_owner.lock().map_err(|_| poisoned())?;
        if owner == Some(thread::current().id()) {
            return Err(StateStoreError::InternalError(InternalError::with_message(
                "Cannot access state entries: this thread has a transaction open on the store"
                    .to_string(),
            )));
        }
        self.inner.lock().map_err(|_| poisoned())
    }
}

fn poisoned() -> StateStoreError {
    StateStoreError::InternalError(InternalError::with_message(
        "Cannot access state entries: mutex lock poisoned".to_string(),
    ))
}

impl StateStore for MemoryStateStore {
    fn get_state_entry(&self, key: &str) -> Result<Option<Vec<u8>>, StateStoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_state_entry(&self, key: String, value: Vec<u8>) -> Result<(), StateStoreError> {
        self.lock()?.insert(key, value);
        Ok(())
    }
}

/// A single invocation's exclusive view of a [`MemoryStateStore`].
pub struct MemoryStateTransaction<'a> {
    entries: MutexGuard<'a, HashMap<String, Vec<u8>>>,
    pending: RefCell<HashMap<String, Vec<u8>>>,
    owner: &'a Mutex<Option<ThreadId>>,
}

impl<'a> MemoryStateTransaction<'a> {
    /// Applies the buffered writes and releases the store.
    pub fn commit(mut self) {
        let pending = self.pending.take();
        debug!("Committing {} state entries", pending.len());
        self.entries.extend(pending);
    }

    /// Discards the buffered writes and releases the store.
    pub fn rollback(self) {
        debug!("Rolling back {} state entries", self.pending.borrow().len());
    }
}

impl<'a> Drop for MemoryStateTransaction<'a> {
    fn drop(&mut self) {
        match self.owner.lock() {
            Ok(mut owner) => *owner = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

impl<'a> StateStore for MemoryStateTransaction<'a> {
    fn get_state_entry(&self, key: &str) -> Result<Option<Vec<u8>>, StateStoreError> {
        if let Some(value) = self.pending.borrow().get(key) {
            return Ok(Some(value.clone()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set_state_entry(&self, key: String, value: Vec<u8>) -> Result<(), StateStoreError> {
        self.pending.borrow_mut().insert(key, value);
        Ok(())
    }
}
