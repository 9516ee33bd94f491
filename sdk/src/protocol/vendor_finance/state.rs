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

//! Protocol structs for vendor finance state
//!
//! Every field is an opaque string. Serialized field names match the ones already present in
//! deployed world state, including the misspelled `extimatedDeliveryDate` and the capitalized
//! `VendorLimitUsed`.

use crate::codec::{from_record_bytes, to_json_bytes, CodecError, FromBytes, IntoBytes};
use crate::protocol::errors::{required, BuilderError};
use crate::protocol::StateRecord;

/// Native representation of a `Quote`
///
/// A quote is a vendor's offer to a buyer. Purchase orders and invoices refer back to it by
/// `quote_id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quote {
    quote_id: String,
    vendor_id: String,
    desc: String,
    items_list: String,
    buyer_id: String,
    quote_date: String,
    total_amount: String,
    #[serde(rename = "extimatedDeliveryDate")]
    estimated_delivery_date: String,
    status: String,
}

impl Quote {
    pub fn quote_id(&self) -> &str {
        &self.quote_id
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn items_list(&self) -> &str {
        &self.items_list
    }

    pub fn buyer_id(&self) -> &str {
        &self.buyer_id
    }

    pub fn quote_date(&self) -> &str {
        &self.quote_date
    }

    pub fn total_amount(&self) -> &str {
        &self.total_amount
    }

    pub fn estimated_delivery_date(&self) -> &str {
        &self.estimated_delivery_date
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn into_builder(self) -> QuoteBuilder {
        QuoteBuilder::new()
            .with_quote_id(self.quote_id)
            .with_vendor_id(self.vendor_id)
            .with_desc(self.desc)
            .with_items_list(self.items_list)
            .with_buyer_id(self.buyer_id)
            .with_quote_date(self.quote_date)
            .with_total_amount(self.total_amount)
            .with_estimated_delivery_date(self.estimated_delivery_date)
            .with_status(self.status)
    }
}

impl StateRecord for Quote {
    const RECORD_TYPE: &'static str = "Quote";
    const ID_FIELD: &'static str = "quoteId";
    const FOREIGN_FIELDS: &'static [&'static str] = &["poId", "invoiceId"];

    fn record_id(&self) -> &str {
        &self.quote_id
    }
}

impl FromBytes<Quote> for Quote {
    fn from_bytes(bytes: &[u8]) -> Result<Quote, CodecError> {
        from_record_bytes(bytes)
    }
}

impl IntoBytes for Quote {
    fn into_bytes(self) -> Result<Vec<u8>, CodecError> {
        to_json_bytes(&self, Self::RECORD_TYPE)
    }
}

/// Builder used to create a `Quote`
#[derive(Default, Clone, PartialEq)]
pub struct QuoteBuilder {
    quote_id: Option<String>,
    vendor_id: Option<String>,
    desc: Option<String>,
    items_list: Option<String>,
    buyer_id: Option<String>,
    quote_date: Option<String>,
    total_amount: Option<String>,
    estimated_delivery_date: Option<String>,
    status: Option<String>,
}

impl QuoteBuilder {
    pub fn new() -> Self {
        QuoteBuilder::default()
    }

    pub fn with_quote_id(mut self, quote_id: String) -> Self {
        self.quote_id = Some(quote_id);
        self
    }

    pub fn with_vendor_id(mut self, vendor_id: String) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }

    pub fn with_desc(mut self, desc: String) -> Self {
        self.desc = Some(desc);
        self
    }

    pub fn with_items_list(mut self, items_list: String) -> Self {
        self.items_list = Some(items_list);
        self
    }

    pub fn with_buyer_id(mut self, buyer_id: String) -> Self {
        self.buyer_id = Some(buyer_id);
        self
    }

    pub fn with_quote_date(mut self, quote_date: String) -> Self {
        self.quote_date = Some(quote_date);
        self
    }

    pub fn with_total_amount(mut self, total_amount: String) -> Self {
        self.total_amount = Some(total_amount);
        self
    }

    pub fn with_estimated_delivery_date(mut self, estimated_delivery_date: String) -> Self {
        self.estimated_delivery_date = Some(estimated_delivery_date);
        self
    }

    pub fn with_status(mut self, status: String) -> Self {
        self.status = Some(status);
        self
    }

    pub fn build(self) -> Result<Quote, BuilderError> {
        Ok(Quote {
            quote_id: required(self.quote_id, "quote_id")?,
            vendor_id: required(self.vendor_id, "vendor_id")?,
            desc: required(self.desc, "desc")?,
            items_list: required(self.items_list, "items_list")?,
            buyer_id: required(self.buyer_id, "buyer_id")?,
            quote_date: required(self.quote_date, "quote_date")?,
            total_amount: required(self.total_amount, "total_amount")?,
            estimated_delivery_date: required(
                self.estimated_delivery_date,
                "estimated_delivery_date",
            )?,
            status: required(self.status, "status")?,
        })
    }
}

/// Native representation of a `PurchaseOrder`
///
/// A purchase order is raised against a quote and draws on the vendor's financing limit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchaseOrder {
    po_id: String,
    quote_id: String,
    vendor_limit_left: String,
    #[serde(rename = "VendorLimitUsed")]
    vendor_limit_used: String,
    banker_id: String,
    po_date: String,
    currency: String,
    po_status: String,
}

impl PurchaseOrder {
    pub fn po_id(&self) -> &str {
        &self.po_id
    }

    pub fn quote_id(&self) -> &str {
        &self.quote_id
    }

    pub fn vendor_limit_left(&self) -> &str {
        &self.vendor_limit_left
    }

    pub fn vendor_limit_used(&self) -> &str {
        &self.vendor_limit_used
    }

    pub fn banker_id(&self) -> &str {
        &self.banker_id
    }

    pub fn po_date(&self) -> &str {
        &self.po_date
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn po_status(&self) -> &str {
        &self.po_status
    }

    pub fn into_builder(self) -> PurchaseOrderBuilder {
        PurchaseOrderBuilder::new()
            .with_po_id(self.po_id)
            .with_quote_id(self.quote_id)
            .with_vendor_limit_left(self.vendor_limit_left)
            .with_vendor_limit_used(self.vendor_limit_used)
            .with_banker_id(self.banker_id)
            .with_po_date(self.po_date)
            .with_currency(self.currency)
            .with_po_status(self.po_status)
    }
}

impl StateRecord for PurchaseOrder {
    const RECORD_TYPE: &'static str = "PurchaseOrder";
    const ID_FIELD: &'static str = "poId";
    const FOREIGN_FIELDS: &'static [&'static str] = &["invoiceId"];

    fn record_id(&self) -> &str {
        &self.po_id
    }
}

impl FromBytes<PurchaseOrder> for PurchaseOrder {
    fn from_bytes(bytes: &[u8]) -> Result<PurchaseOrder, CodecError> {
        from_record_bytes(bytes)
    }
}

impl IntoBytes for PurchaseOrder {
    fn into_bytes(self) -> Result<Vec<u8>, CodecError> {
        to_json_bytes(&self, Self::RECORD_TYPE)
    }
}

/// Builder used to create a `PurchaseOrder`
#[derive(Default, Clone, PartialEq)]
pub struct PurchaseOrderBuilder {
    po_id: Option<String>,
    quote_id: Option<String>,
    vendor_limit_left: Option<String>,
    vendor_limit_used: Option<String>,
    banker_id: Option<String>,
    po_date: Option<String>,
    currency: Option<String>,
    po_status: Option<String>,
}

impl PurchaseOrderBuilder {
    pub fn new() -> Self {
        PurchaseOrderBuilder::default()
    }

    pub fn with_po_id(mut self, po_id: String) -> Self {
        self.po_id = Some(po_id);
        self
    }

    pub fn with_quote_id(mut self, quote_id: String) -> Self {
        self.quote_id = Some(quote_id);
        self
    }

    pub fn with_vendor_limit_left(mut self, vendor_limit_left: String) -> Self {
        self.vendor_limit_left = Some(vendor_limit_left);
        self
    }

    pub fn with_vendor_limit_used(mut self, vendor_limit_used: String) -> Self {
        self.vendor_limit_used = Some(vendor_limit_used);
        self
    }

    pub fn with_banker_id(mut self, banker_id: String) -> Self {
        self.banker_id = Some(banker_id);
        self
    }

    pub fn with_po_date(mut self, po_date: String) -> Self {
        self.po_date = Some(po_date);
        self
    }

    pub fn with_currency(mut self, currency: String) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_po_status(mut self, po_status: String) -> Self {
        self.po_status = Some(po_status);
        self
    }

    pub fn build(self) -> Result<PurchaseOrder, BuilderError> {
        Ok(PurchaseOrder {
            po_id: required(self.po_id, "po_id")?,
            quote_id: required(self.quote_id, "quote_id")?,
            vendor_limit_left: required(self.vendor_limit_left, "vendor_limit_left")?,
            vendor_limit_used: required(self.vendor_limit_used, "vendor_limit_used")?,
            banker_id: required(self.banker_id, "banker_id")?,
            po_date: required(self.po_date, "po_date")?,
            currency: required(self.currency, "currency")?,
            po_status: required(self.po_status, "po_status")?,
        })
    }
}

/// Native representation of an `Invoice`
///
/// An invoice bills the buyer for a purchase order. `request_for_finance` marks invoices the
/// vendor wants financed before the buyer pays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invoice {
    invoice_id: String,
    quote_id: String,
    vendor_id: String,
    buyer_id: String,
    po_id: String,
    invoice_status: String,
    request_for_finance: String,
    invoice_raised_date: String,
    invoice_accepted_date: String,
}

impl Invoice {
    pub fn invoice_id(&self) -> &str {
        &self.invoice_id
    }

    pub fn quote_id(&self) -> &str {
        &self.quote_id
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn buyer_id(&self) -> &str {
        &self.buyer_id
    }

    pub fn po_id(&self) -> &str {
        &self.po_id
    }

    pub fn invoice_status(&self) -> &str {
        &self.invoice_status
    }

    pub fn request_for_finance(&self) -> &str {
        &self.request_for_finance
    }

    pub fn invoice_raised_date(&self) -> &str {
        &self.invoice_raised_date
    }

    pub fn invoice_accepted_date(&self) -> &str {
        &self.invoice_accepted_date
    }

    pub fn into_builder(self) -> InvoiceBuilder {
        InvoiceBuilder::new()
            .with_invoice_id(self.invoice_id)
            .with_quote_id(self.quote_id)
            .with_vendor_id(self.vendor_id)
            .with_buyer_id(self.buyer_id)
            .with_po_id(self.po_id)
            .with_invoice_status(self.invoice_status)
            .with_request_for_finance(self.request_for_finance)
            .with_invoice_raised_date(self.invoice_raised_date)
            .with_invoice_accepted_date(self.invoice_accepted_date)
    }
}

impl StateRecord for Invoice {
    const RECORD_TYPE: &'static str = "Invoice";
    const ID_FIELD: &'static str = "invoiceId";
    const FOREIGN_FIELDS: &'static [&'static str] = &[];

    fn record_id(&self) -> &str {
        &self.invoice_id
    }
}

impl FromBytes<Invoice> for Invoice {
    fn from_bytes(bytes: &[u8]) -> Result<Invoice, CodecError> {
        from_record_bytes(bytes)
    }
}

impl IntoBytes for Invoice {
    fn into_bytes(self) -> Result<Vec<u8>, CodecError> {
        to_json_bytes(&self, Self::RECORD_TYPE)
    }
}

/// Builder used to create an `Invoice`
#[derive(Default, Clone, PartialEq)]
pub struct InvoiceBuilder {
    invoice_id: Option<String>,
    quote_id: Option<String>,
    vendor_id: Option<String>,
    buyer_id: Option<String>,
    po_id: Option<String>,
    invoice_status: Option<String>,
    request_for_finance: Option<String>,
    invoice_raised_date: Option<String>,
    invoice_accepted_date: Option<String>,
}

impl InvoiceBuilder {
    pub fn new() -> Self {
        InvoiceBuilder::default()
    }

    pub fn with_invoice_id(mut self, invoice_id: String) -> Self {
        self.invoice_id = Some(invoice_id);
        self
    }

    pub fn with_quote_id(mut self, quote_id: String) -> Self {
        self.quote_id = Some(quote_id);
        self
    }

    pub fn with_vendor_id(mut self, vendor_id: String) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }

    pub fn with_buyer_id(mut self, buyer_id: String) -> Self {
        self.buyer_id = Some(buyer_id);
        self
    }

    pub fn with_po_id(mut self, po_id: String) -> Self {
        self.po_id = Some(po_id);
        self
    }

    pub fn with_invoice_status(mut self, invoice_status: String) -> Self {
        self.invoice_status = Some(invoice_status);
        self
    }

    pub fn with_request_for_finance(mut self, request_for_finance: String) -> Self {
        self.request_for_finance = Some(request_for_finance);
        self
    }

    pub fn with_invoice_raised_date(mut self, invoice_raised_date: String) -> Self {
        self.invoice_raised_date = Some(invoice_raised_date);
        self
    }

    pub fn with_invoice_accepted_date(mut self, invoice_accepted_date: String) -> Self {
        self.invoice_accepted_date = Some(invoice_accepted_date);
        self
    }

    pub fn build(self) -> Result<Invoice, BuilderError> {
        Ok(Invoice {
            invoice_id: required(self.invoice_id, "invoice_id")?,
            quote_id: required(self.quote_id, "quote_id")?,
            vendor_id: required(self.vendor_id, "vendor_id")?,
            buyer_id: required(self.buyer_id, "buyer_id")?,
            po_id: required(self.po_id, "po_id")?,
            invoice_status: required(self.invoice_status, "invoice_status")?,
            request_for_finance: required(self.request_for_finance, "request_for_finance")?,
            invoice_raised_date: required(self.invoice_raised_date, "invoice_raised_date")?,
            invoice_accepted_date: required(
                self.invoice_accepted_date,
                "invoice_accepted_date",
            )?,
        })
    }
}
