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

use std::error;
use std::fmt;

/// The backing store could not be reached. Unlike `InternalError`, the same request may succeed
/// if tried again later.
#[derive(Debug)]
pub struct ResourceTemporarilyUnavailableError {
    source: Box<dyn error::Error + Send + Sync>,
}

impl ResourceTemporarilyUnavailableError {
    /// Constructs a new error from a plain message, for collaborators whose own error types
    /// cannot cross thread boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use vendor_finance_sdk::error::ResourceTemporarilyUnavailableError;
    ///
    /// let err = ResourceTemporarilyUnavailableError::with_message("validator offline".into());
    /// assert_eq!(err.to_string(), "validator offline");
    /// ```
    pub fn with_message(message: String) -> Self {
        Self {
            source: message.into(),
        }
    }
}

impl error::Error for ResourceTemporarilyUnavailableError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        let source: &(dyn error::Error + 'static) = &*self.source;
        Some(source)
    }
}

impl fmt::Display for ResourceTemporarilyUnavailableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
