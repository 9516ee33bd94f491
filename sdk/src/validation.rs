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

//! Typed checks for record fields.
//!
//! Records keep every field as a string. These checks parse the fields that carry amounts,
//! dates and currency codes so a contract can reject values that would not parse later.
//! Status fields and the cross-record references are not checked.

use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;

use crate::protocol::vendor_finance::state::{Invoice, PurchaseOrder, Quote};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyField(String),
    InvalidAmount { field: String, value: String },
    InvalidDate { field: String, value: String },
    InvalidCurrency(String),
}

impl StdError for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "'{}' must not be empty", field),
            ValidationError::InvalidAmount { field, value } => write!(
                f,
                "'{}' must be a non-negative decimal amount, got \"{}\"",
                field, value
            ),
            ValidationError::InvalidDate { field, value } => write!(
                f,
                "'{}' must be a YYYY-MM-DD date or RFC 3339 timestamp, got \"{}\"",
                field, value
            ),
            ValidationError::InvalidCurrency(value) => write!(
                f,
                "'currency' must be a three letter uppercase code, got \"{}\"",
                value
            ),
        }
    }
}

/// A record whose fields can be checked before it is written.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Parses a non-negative decimal amount such as `"1250.00"`.
pub fn parse_amount(field: &str, value: &str) -> Result<Decimal, ValidationError> {
    match Decimal::from_str(value) {
        Ok(amount) if !amount.is_sign_negative() => Ok(amount),
        _ => Err(ValidationError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parses a calendar date, accepting either `2021-08-01` or a full RFC 3339 timestamp.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn check_not_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()));
    }
    Ok(())
}

fn check_currency(value: &str) -> Result<(), ValidationError> {
    if value.len() == 3 && value.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrency(value.to_string()))
    }
}

impl Validate for Quote {
    fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("quoteId", self.quote_id())?;
        parse_date("quoteDate", self.quote_date())?;
        parse_amount("totalAmount", self.total_amount())?;
        parse_date("estimatedDeliveryDate", self.estimated_delivery_date())?;
        Ok(())
    }
}

impl Validate for PurchaseOrder {
    fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("poId", self.po_id())?;
        parse_amount("vendorLimitLeft", self.vendor_limit_left())?;
        parse_amount("vendorLimitUsed", self.vendor_limit_used())?;
        parse_date("poDate", self.po_date())?;
        check_currency(self.currency())
    }
}

impl Validate for Invoice {
    fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("invoiceId", self.invoice_id())?;
        parse_date("invoiceRaisedDate", self.invoice_raised_date())?;
        // not yet accepted
        if !self.invoice_accepted_date().is_empty() {
            parse_date("invoiceAcceptedDate", self.invoice_accepted_date())?;
        }
        Ok(())
    }
}
