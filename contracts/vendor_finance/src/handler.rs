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

#[cfg(feature = "sawtooth")]
use sawtooth_sdk::{
    messages::processor::TpProcessRequest,
    processor::handler::{ApplyError, TransactionContext, TransactionHandler},
};

use vendor_finance_sdk::codec::FromBytes;
use vendor_finance_sdk::protocol::vendor_finance::payload::{Action, VendorFinancePayload};
#[cfg(feature = "sawtooth")]
use vendor_finance_sdk::store::sawtooth::{SawtoothStateStore, VENDOR_FINANCE_NAMESPACE};
use vendor_finance_sdk::store::StateStore;

use crate::contract::VendorFinanceContract;
use crate::error::ContractError;

/// Decodes vendor finance payloads and dispatches them to a `VendorFinanceContract`
#[derive(Debug, Default, Clone)]
pub struct VendorFinanceHandler {
    contract: VendorFinanceContract,
}

impl VendorFinanceHandler {
    pub fn new() -> Self {
        VendorFinanceHandler::default()
    }

    pub fn with_contract(contract: VendorFinanceContract) -> Self {
        VendorFinanceHandler { contract }
    }

    pub fn contract(&self) -> &VendorFinanceContract {
        &self.contract
    }

    pub fn apply(&self, payload: &[u8], store: &dyn StateStore) -> Result<(), ContractError> {
        let payload =
            VendorFinancePayload::from_bytes(payload).map_err(ContractError::InvalidPayload)?;

        info!("Vendor Finance Payload {}", payload.action().name());

        match payload.into_action() {
            Action::InitLedger => self.contract.init_ledger(store),
            Action::PlaceQuote(quote) => self.contract.place_quote(store, quote),
            Action::UpdateQuote(quote) => self.contract.update_quote(store, quote),
            Action::RaisePo(po) => self.contract.raise_po(store, po),
            Action::UpdatePo(po) => self.contract.update_po(store, po),
            Action::RaiseInvoice(invoice) => self.contract.raise_invoice(store, invoice),
            Action::UpdateInvoice(invoice) => self.contract.update_invoice(store, invoice),
        }
    }
}

/// Runs the vendor finance contract as a Sawtooth transaction family
#[cfg(feature = "sawtooth")]
pub struct VendorFinanceTransactionHandler {
    handler: VendorFinanceHandler,
    family_name: String,
    family_versions: Vec<String>,
    namespaces: Vec<String>,
}

#[cfg(feature = "sawtooth")]
impl VendorFinanceTransactionHandler {
    pub fn new(handler: VendorFinanceHandler) -> Self {
        VendorFinanceTransactionHandler {
            handler,
            family_name: "vendor_finance".to_string(),
            family_versions: vec!["1".to_string()],
            namespaces: vec![VENDOR_FINANCE_NAMESPACE.to_string()],
        }
    }
}

#[cfg(feature = "sawtooth")]
impl TransactionHandler for VendorFinanceTransactionHandler {
    fn family_name(&self) -> String {
        self.family_name.clone()
    }

    fn family_versions(&self) -> Vec<String> {
        self.family_versions.clone()
    }

    fn namespaces(&self) -> Vec<String> {
        self.namespaces.clone()
    }

    fn apply(
        &self,
        request: &TpProcessRequest,
        context: &mut dyn TransactionContext,
    ) -> Result<(), ApplyError> {
        let store = SawtoothStateStore::new(&*context);
        self.handler
            .apply(request.get_payload(), &store)
            .map_err(|err| match err {
                // the validator retries internal errors
                ContractError::StoreUnavailable(_) | ContractError::InternalError(_) => {
                    ApplyError::InternalError(err.to_string())
                }
                _ => {
                    info!("{} received {}", self.family_name, err);
                    ApplyError::InvalidTransaction(err.to_string())
                }
            })
    }
}
