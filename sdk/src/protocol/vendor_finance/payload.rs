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

//! Protocol structs for vendor finance transaction payloads

use crate::codec::{from_json_bytes, to_json_bytes, CodecError, FromBytes, IntoBytes};
use crate::protocol::errors::{required, BuilderError};
use crate::protocol::vendor_finance::state::{Invoice, PurchaseOrder, Quote};

/// The vendor finance payload's action envelope
///
/// Encoded as `{"action": "<snake_case name>", "record": {...}}`; `init_ledger` carries no
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "record", rename_all = "snake_case")]
pub enum Action {
    InitLedger,
    PlaceQuote(Quote),
    UpdateQuote(Quote),
    RaisePo(PurchaseOrder),
    UpdatePo(PurchaseOrder),
    RaiseInvoice(Invoice),
    UpdateInvoice(Invoice),
}

impl Action {
    /// The wire name of the action
    pub fn name(&self) -> &'static str {
        match self {
            Action::InitLedger => "init_ledger",
            Action::PlaceQuote(_) => "place_quote",
            Action::UpdateQuote(_) => "update_quote",
            Action::RaisePo(_) => "raise_po",
            Action::UpdatePo(_) => "update_po",
            Action::RaiseInvoice(_) => "raise_invoice",
            Action::UpdateInvoice(_) => "update_invoice",
        }
    }
}

/// Native representation of a vendor finance payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorFinancePayload {
    action: Action,
}

impl VendorFinancePayload {
    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn into_action(self) -> Action {
        self.action
    }
}

impl FromBytes<VendorFinancePayload> for VendorFinancePayload {
    fn from_bytes(bytes: &[u8]) -> Result<VendorFinancePayload, CodecError> {
        from_json_bytes(bytes, "VendorFinancePayload")
    }
}

impl IntoBytes for VendorFinancePayload {
    fn into_bytes(self) -> Result<Vec<u8>, CodecError> {
        to_json_bytes(&self, "VendorFinancePayload")
    }
}

/// Builder used to create a `VendorFinancePayload`
#[derive(Default, Clone)]
pub struct VendorFinancePayloadBuilder {
    action: Option<Action>,
}

impl VendorFinancePayloadBuilder {
    pub fn new() -> Self {
        VendorFinancePayloadBuilder::default()
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn build(self) -> Result<VendorFinancePayload, BuilderError> {
        Ok(VendorFinancePayload {
            action: required(self.action, "action")?,
        })
    }
}
