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

use vendor_finance_sdk::codec::{FromBytes, IntoBytes};
use vendor_finance_sdk::error::InternalError;
use vendor_finance_sdk::protocol::vendor_finance::state::{
    Invoice, PurchaseOrder, Quote, QuoteBuilder,
};
use vendor_finance_sdk::protocol::StateRecord;
use vendor_finance_sdk::store::StateStore;
use vendor_finance_sdk::validation::Validate;

use crate::error::ContractError;
use crate::state::VendorFinanceState;

/// Id of the quote written by `init_ledger`
pub const PLACEHOLDER_QUOTE_ID: &str = "quote1";
const PLACEHOLDER_VALUE: &str = "NA";

/// The vendor finance operations.
///
/// The contract holds no state of its own; every operation works on the store passed to it.
/// Creating operations (`place_quote`, `raise_po`, `raise_invoice`) fail if anything is already
/// stored under the record's id. Updates fail if nothing is, and always replace the whole
/// record. The check and the write are two separate store calls, so the store must keep other
/// invocations from writing the same key in between. A Sawtooth validator does; with a
/// `MemoryStateStore`, run the invocation inside `begin_transaction`.
#[derive(Debug, Clone, Default)]
pub struct VendorFinanceContract {
    validate_fields: bool,
}

impl VendorFinanceContract {
    pub fn new() -> Self {
        VendorFinanceContract::default()
    }

    /// Whether amounts, dates and currency codes are checked before a record is written
    pub fn validates_fields(&self) -> bool {
        self.validate_fields
    }

    /// Writes the placeholder quote `quote1` with every other field set to `NA`.
    ///
    /// This is not gated: running it again resets `quote1`.
    pub fn init_ledger(&self, store: &dyn StateStore) -> Result<(), ContractError> {
        let quote = QuoteBuilder::new()
            .with_quote_id(PLACEHOLDER_QUOTE_ID.to_string())
            .with_vendor_id(PLACEHOLDER_VALUE.to_string())
            .with_desc(PLACEHOLDER_VALUE.to_string())
            .with_items_list(PLACEHOLDER_VALUE.to_string())
            .with_buyer_id(PLACEHOLDER_VALUE.to_string())
            .with_quote_date(PLACEHOLDER_VALUE.to_string())
            .with_total_amount(PLACEHOLDER_VALUE.to_string())
            .with_estimated_delivery_date(PLACEHOLDER_VALUE.to_string())
            .with_status(PLACEHOLDER_VALUE.to_string())
            .build()
            .map_err(|err| {
                ContractError::InternalError(InternalError::from_source_with_context(
                    Box::new(err),
                    "Cannot build placeholder quote".to_string(),
                ))
            })?;

        info!("Seeding world state with quote {}", PLACEHOLDER_QUOTE_ID);
        VendorFinanceState::new(store).set_record(quote)
    }

    pub fn place_quote(&self, store: &dyn StateStore, quote: Quote) -> Result<(), ContractError> {
        self.create(store, quote)
    }

    pub fn update_quote(&self, store: &dyn StateStore, quote: Quote) -> Result<(), ContractError> {
        self.update(store, quote)
    }

    pub fn get_quote_by_id(
        &self,
        store: &dyn StateStore,
        quote_id: &str,
    ) -> Result<Quote, ContractError> {
        self.get_by_id(store, quote_id)
    }

    pub fn raise_po(&self, store: &dyn StateStore, po: PurchaseOrder) -> Result<(), ContractError> {
        self.create(store, po)
    }

    pub fn update_po(
        &self,
        store: &dyn StateStore,
        po: PurchaseOrder,
    ) -> Result<(), ContractError> {
        self.update(store, po)
    }

    pub fn get_po_by_id(
        &self,
        store: &dyn StateStore,
        po_id: &str,
    ) -> Result<PurchaseOrder, ContractError> {
        self.get_by_id(store, po_id)
    }

    pub fn raise_invoice(
        &self,
        store: &dyn StateStore,
        invoice: Invoice,
    ) -> Result<(), ContractError> {
        self.create(store, invoice)
    }

    pub fn update_invoice(
        &self,
        store: &dyn StateStore,
        invoice: Invoice,
    ) -> Result<(), ContractError> {
        self.update(store, invoice)
    }

    pub fn get_invoice_by_id(
        &self,
        store: &dyn StateStore,
        invoice_id: &str,
    ) -> Result<Invoice, ContractError> {
        self.get_by_id(store, invoice_id)
    }

    /// Returns whether a record of any type is stored under `id`.
    pub fn is_exists(&self, store: &dyn StateStore, id: &str) -> Result<bool, ContractError> {
        VendorFinanceState::new(store).exists(id)
    }

    fn create<T>(&self, store: &dyn StateStore, record: T) -> Result<(), ContractError>
    where
        T: StateRecord + IntoBytes + Validate,
    {
        self.check_fields(&record)?;

        let state = VendorFinanceState::new(store);
        if state.exists(record.record_id())? {
            warn!("{} {} already exists", T::RECORD_TYPE, record.record_id());
            return Err(ContractError::AlreadyExists(record.record_id().to_string()));
        }

        info!("Creating {} {}", T::RECORD_TYPE, record.record_id());
        state.set_record(record)
    }

    fn update<T>(&self, store: &dyn StateStore, record: T) -> Result<(), ContractError>
    where
        T: StateRecord + IntoBytes + Validate,
    {
        self.check_fields(&record)?;

        let state = VendorFinanceState::new(store);
        if !state.exists(record.record_id())? {
            warn!("{} {} does not exist", T::RECORD_TYPE, record.record_id());
            return Err(ContractError::NotFound(record.record_id().to_string()));
        }

        info!("Replacing {} {}", T::RECORD_TYPE, record.record_id());
        state.set_record(record)
    }

    fn get_by_id<T>(&self, store: &dyn StateStore, id: &str) -> Result<T, ContractError>
    where
        T: StateRecord + FromBytes<T>,
    {
        debug!("Fetching {} {}", T::RECORD_TYPE, id);
        VendorFinanceState::new(store)
            .get_record(id)?
            .ok_or_else(|| ContractError::NotFound(id.to_string()))
    }

    fn check_fields<T: Validate>(&self, record: &T) -> Result<(), ContractError> {
        if self.validate_fields {
            record.validate()?;
        }
        Ok(())
    }
}

/// Builder used to create a `VendorFinanceContract`
#[derive(Default, Clone)]
pub struct VendorFinanceContractBuilder {
    validate_fields: Option<bool>,
}

impl VendorFinanceContractBuilder {
    pub fn new() -> Self {
        VendorFinanceContractBuilder::default()
    }

    /// Check amounts, dates and currency codes on every place, raise and update. Off by
    /// default, in which case any string is accepted.
    pub fn with_field_validation(mut self, validate_fields: bool) -> Self {
        self.validate_fields = Some(validate_fields);
        self
    }

    pub fn build(self) -> VendorFinanceContract {
        VendorFinanceContract {
            validate_fields: self.validate_fields.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    use pretty_assertions::assert_eq;
    use vendor_finance_sdk::error::ResourceTemporarilyUnavailableError;
    use vendor_finance_sdk::protocol::vendor_finance::state::{
        InvoiceBuilder, PurchaseOrderBuilder,
    };
    use vendor_finance_sdk::store::{MemoryStateStore, StateStoreError};
    use vendor_finance_sdk::validation::ValidationError;

    /// A store whose backing ledger cannot be reached
    struct UnavailableStateStore;

    impl StateStore for UnavailableStateStore {
        fn get_state_entry(&self, _key: &str) -> Result<Option<Vec<u8>>, StateStoreError> {
            Err(StateStoreError::from(
                ResourceTemporarilyUnavailableError::with_message("peer unreachable".into()),
            ))
        }

        fn set_state_entry(&self, _key: String, _value: Vec<u8>) -> Result<(), StateStoreError> {
            Err(StateStoreError::from(
                ResourceTemporarilyUnavailableError::with_message("peer unreachable".into()),
            ))
        }
    }

    fn quote(quote_id: &str, status: &str) -> Quote {
        QuoteBuilder::new()
            .with_quote_id(quote_id.into())
            .with_vendor_id("V1".into())
            .with_desc("Office chairs".into())
            .with_items_list("chair x40".into())
            .with_buyer_id("BUYER1".into())
            .with_quote_date("2021-07-01".into())
            .with_total_amount("4000.00".into())
            .with_estimated_delivery_date("2021-09-01".into())
            .with_status(status.into())
            .build()
            .unwrap()
    }

    fn purchase_order(po_id: &str, po_status: &str) -> PurchaseOrder {
        PurchaseOrderBuilder::new()
            .with_po_id(po_id.into())
            .with_quote_id("q1".into())
            .with_vendor_limit_left("6000".into())
            .with_vendor_limit_used("4000".into())
            .with_banker_id("BANK1".into())
            .with_po_date("2021-07-15".into())
            .with_currency("USD".into())
            .with_po_status(po_status.into())
            .build()
            .unwrap()
    }

    fn invoice(invoice_id: &str, invoice_status: &str) -> Invoice {
        InvoiceBuilder::new()
            .with_invoice_id(invoice_id.into())
            .with_quote_id("q1".into())
            .with_vendor_id("V1".into())
            .with_buyer_id("BUYER1".into())
            .with_po_id("po1".into())
            .with_invoice_status(invoice_status.into())
            .with_request_for_finance("true".into())
            .with_invoice_raised_date("2021-09-02".into())
            .with_invoice_accepted_date("".into())
            .build()
            .unwrap()
    }

    #[test]
    // 1. Place a draft quote and read it back
    // 2. Update it to approved and check no field of the draft remains
    // 3. Check that placing it again is rejected
    fn test_quote_lifecycle() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContract::new();

        contract.place_quote(&store, quote("q1", "DRAFT")).unwrap();
        let stored = contract.get_quote_by_id(&store, "q1").unwrap();
        assert_eq!(stored.status(), "DRAFT");
        assert_eq!(stored, quote("q1", "DRAFT"));

        let approved = QuoteBuilder::new()
            .with_quote_id("q1".into())
            .with_vendor_id("V2".into())
            .with_desc("".into())
            .with_items_list("desk x10".into())
            .with_buyer_id("BUYER2".into())
            .with_quote_date("2021-07-03".into())
            .with_total_amount("1500.00".into())
            .with_estimated_delivery_date("2021-10-01".into())
            .with_status("APPROVED".into())
            .build()
            .unwrap();
        contract.update_quote(&store, approved.clone()).unwrap();
        assert_eq!(contract.get_quote_by_id(&store, "q1").unwrap(), approved);

        match contract.place_quote(&store, quote("q1", "DRAFT")) {
            Err(ContractError::AlreadyExists(id)) => assert_eq!(id, "q1"),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
        assert_eq!(contract.get_quote_by_id(&store, "q1").unwrap(), approved);
    }

    #[test]
    fn test_purchase_order_lifecycle() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContract::new();

        assert!(!contract.is_exists(&store, "po1").unwrap());
        contract.raise_po(&store, purchase_order("po1", "OPEN")).unwrap();
        assert!(contract.is_exists(&store, "po1").unwrap());

        contract
            .update_po(&store, purchase_order("po1", "CLOSED"))
            .unwrap();
        assert_eq!(
            contract.get_po_by_id(&store, "po1").unwrap(),
            purchase_order("po1", "CLOSED")
        );

        assert!(matches!(
            contract.raise_po(&store, purchase_order("po1", "OPEN")),
            Err(ContractError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_invoice_lifecycle() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContract::new();

        contract
            .raise_invoice(&store, invoice("inv1", "RAISED"))
            .unwrap();
        assert_eq!(
            contract.get_invoice_by_id(&store, "inv1").unwrap(),
            invoice("inv1", "RAISED")
        );

        let accepted = invoice("inv1", "ACCEPTED")
            .into_builder()
            .with_invoice_accepted_date("2021-09-10".into())
            .build()
            .unwrap();
        contract.update_invoice(&store, accepted.clone()).unwrap();
        assert_eq!(contract.get_invoice_by_id(&store, "inv1").unwrap(), accepted);
    }

    #[test]
    // Test that updating any record type that was never created fails with NotFound and
    // writes nothing
    fn test_update_missing_record() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContract::new();

        match contract.update_quote(&store, quote("q9", "APPROVED")) {
            Err(ContractError::NotFound(id)) => assert_eq!(id, "q9"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(
            contract.update_po(&store, purchase_order("po9", "OPEN")),
            Err(ContractError::NotFound(_))
        ));
        assert!(matches!(
            contract.update_invoice(&store, invoice("inv9", "RAISED")),
            Err(ContractError::NotFound(_))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_get_missing_record() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContract::new();

        match contract.get_quote_by_id(&store, "missing") {
            Err(ContractError::NotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(
            contract.get_po_by_id(&store, "missing"),
            Err(ContractError::NotFound(_))
        ));
        assert!(matches!(
            contract.get_invoice_by_id(&store, "missing"),
            Err(ContractError::NotFound(_))
        ));
    }

    #[test]
    // Test that ids are shared across record types: an invoice cannot reuse a quote's id
    fn test_ids_shared_across_record_types() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContract::new();

        contract.place_quote(&store, quote("doc1", "DRAFT")).unwrap();
        assert!(matches!(
            contract.raise_invoice(&store, invoice("doc1", "RAISED")),
            Err(ContractError::AlreadyExists(_))
        ));
        assert!(matches!(
            contract.get_invoice_by_id(&store, "doc1"),
            Err(ContractError::MalformedRecord(_, _))
        ));
    }

    #[test]
    // 1. Test that a purchase order whose quote id equals its own id is not read as a quote
    // 2. Test that a quote stored under the empty id is not read as an invoice or purchase order
    fn test_other_record_type_is_malformed_even_with_matching_id() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContract::new();

        let po = purchase_order("p1", "OPEN")
            .into_builder()
            .with_quote_id("p1".into())
            .build()
            .unwrap();
        contract.raise_po(&store, po.clone()).unwrap();
        match contract.get_quote_by_id(&store, "p1") {
            Err(ContractError::MalformedRecord(id, _)) => assert_eq!(id, "p1"),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        assert_eq!(contract.get_po_by_id(&store, "p1").unwrap(), po);

        let unnamed = quote("", "DRAFT");
        contract.place_quote(&store, unnamed.clone()).unwrap();
        assert!(matches!(
            contract.get_invoice_by_id(&store, ""),
            Err(ContractError::MalformedRecord(_, _))
        ));
        assert!(matches!(
            contract.get_po_by_id(&store, ""),
            Err(ContractError::MalformedRecord(_, _))
        ));
        assert_eq!(contract.get_quote_by_id(&store, "").unwrap(), unnamed);
    }

    #[test]
    // Test that no field contents are checked by default, empty strings included
    fn test_empty_fields_accepted_without_validation() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContract::new();
        assert!(!contract.validates_fields());

        let empty = InvoiceBuilder::new()
            .with_invoice_id("".into())
            .with_quote_id("".into())
            .with_vendor_id("".into())
            .with_buyer_id("".into())
            .with_po_id("".into())
            .with_invoice_status("".into())
            .with_request_for_finance("".into())
            .with_invoice_raised_date("".into())
            .with_invoice_accepted_date("".into())
            .build()
            .unwrap();

        contract.raise_invoice(&store, empty.clone()).unwrap();
        assert_eq!(contract.get_invoice_by_id(&store, "").unwrap(), empty);
    }

    #[test]
    // Test that with validation on, a bad field is rejected before anything is written
    fn test_validation_rejects_bad_fields() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContractBuilder::new()
            .with_field_validation(true)
            .build();

        let bad = quote("q1", "DRAFT")
            .into_builder()
            .with_total_amount("four thousand".into())
            .build()
            .unwrap();

        match contract.place_quote(&store, bad) {
            Err(ContractError::ValidationError(ValidationError::InvalidAmount {
                field, ..
            })) => assert_eq!(field, "totalAmount"),
            other => panic!("expected ValidationError, got {:?}", other),
        }
        assert!(!contract.is_exists(&store, "q1").unwrap());

        contract.place_quote(&store, quote("q1", "DRAFT")).unwrap();
        let bad_currency = purchase_order("po1", "OPEN")
            .into_builder()
            .with_currency("dollars".into())
            .build()
            .unwrap();
        assert!(matches!(
            contract.update_po(&store, bad_currency),
            Err(ContractError::ValidationError(ValidationError::InvalidCurrency(_)))
        ));
    }

    #[test]
    // Test that the placeholder quote is seeded, and that seeding again resets it
    fn test_init_ledger() {
        let store = MemoryStateStore::new();
        let contract = VendorFinanceContractBuilder::new()
            .with_field_validation(true)
            .build();

        contract.init_ledger(&store).unwrap();
        let placeholder = contract
            .get_quote_by_id(&store, PLACEHOLDER_QUOTE_ID)
            .unwrap();
        assert_eq!(placeholder.vendor_id(), "NA");
        assert_eq!(placeholder.status(), "NA");
        assert_eq!(placeholder.estimated_delivery_date(), "NA");

        let changed = placeholder
            .clone()
            .into_builder()
            .with_status("APPROVED".into())
            .build()
            .unwrap();
        VendorFinanceState::new(&store).set_record(changed).unwrap();

        contract.init_ledger(&store).unwrap();
        assert_eq!(
            contract
                .get_quote_by_id(&store, PLACEHOLDER_QUOTE_ID)
                .unwrap(),
            placeholder
        );
    }

    #[test]
    // Test that store failures surface as StoreUnavailable and are never read as absence
    fn test_store_unavailable() {
        let store = UnavailableStateStore;
        let contract = VendorFinanceContract::new();

        assert!(matches!(
            contract.is_exists(&store, "q1"),
            Err(ContractError::StoreUnavailable(_))
        ));
        assert!(matches!(
            contract.place_quote(&store, quote("q1", "DRAFT")),
            Err(ContractError::StoreUnavailable(_))
        ));
        assert!(matches!(
            contract.update_invoice(&store, invoice("inv1", "RAISED")),
            Err(ContractError::StoreUnavailable(_))
        ));
        assert!(matches!(
            contract.get_po_by_id(&store, "po1"),
            Err(ContractError::StoreUnavailable(_))
        ));
        assert!(matches!(
            contract.init_ledger(&store),
            Err(ContractError::StoreUnavailable(_))
        ));
    }

    #[test]
    // Test that racing raises of the same purchase order, each in its own transaction, leave
    // exactly one winner and the rest rejected with AlreadyExists
    fn test_concurrent_raise_in_transactions() {
        let store = MemoryStateStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    let contract = VendorFinanceContract::new();
                    let txn = store.begin_transaction().unwrap();
                    let po = purchase_order("po1", &format!("OPEN-{}", i));
                    match contract.raise_po(&txn, po) {
                        Ok(()) => {
                            txn.commit();
                            Ok(())
                        }
                        Err(err) => Err(err),
                    }
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|err| matches!(err, ContractError::AlreadyExists(_))));
        assert_eq!(store.len().unwrap(), 1);
    }
}
