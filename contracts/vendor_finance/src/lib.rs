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

//! The vendor finance contract.
//!
//! [`VendorFinanceContract`] places, raises, updates and reads quotes, purchase orders and
//! invoices in whatever [`StateStore`](vendor_finance_sdk::store::StateStore) it is handed for
//! an invocation. [`VendorFinanceHandler`] decodes a JSON payload and dispatches it to the
//! contract. With the `sawtooth` feature, `VendorFinanceTransactionHandler` registers the
//! handler as the `vendor_finance` transaction family.

#[macro_use]
extern crate log;

pub mod contract;
pub mod error;
pub mod handler;
pub mod state;

pub use contract::{VendorFinanceContract, VendorFinanceContractBuilder};
pub use error::ContractError;
pub use handler::VendorFinanceHandler;
#[cfg(feature = "sawtooth")]
pub use handler::VendorFinanceTransactionHandler;
