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

//! Records and world state access for the vendor finance contract.
//!
//! Quotes, purchase orders and invoices are kept in a key-value world state, one JSON value per
//! record id. This crate holds the record types and their builders, the JSON codec, and the
//! [`store::StateStore`] boundary the contract writes through. An in-memory store is always
//! available; a Sawtooth-backed store is behind the `sawtooth` feature.

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

pub mod codec;
pub mod error;
pub mod protocol;
pub mod store;
#[cfg(feature = "validation")]
pub mod validation;
