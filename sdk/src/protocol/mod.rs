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

pub mod errors;
pub mod vendor_finance;

/// A record that lives in world state under its own identifier.
pub trait StateRecord {
    /// Name of the record type as it appears in errors and logs
    const RECORD_TYPE: &'static str;

    /// Stored field holding the record's id; a stored value must carry it
    const ID_FIELD: &'static str;

    /// Stored fields that only another record type carries
    const FOREIGN_FIELDS: &'static [&'static str];

    /// The key the record is stored under
    fn record_id(&self) -> &str;
}
