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

/// An error that is not the caller's fault and that retrying will not fix, such as a poisoned
/// lock inside a store or a record the codec refused to produce.
#[derive(Debug)]
pub struct InternalError {
    message: String,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

impl InternalError {
    /// Constructs an `InternalError` that displays as `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vendor_finance_sdk::error::InternalError;
    ///
    /// let err = InternalError::with_message("lock poisoned".to_string());
    /// assert_eq!(err.to_string(), "lock poisoned");
    /// ```
    pub fn with_message(message: String) -> Self {
        Self {
            message,
            source: None,
        }
    }

    /// Constructs an `InternalError` that displays as `"{context}: {source}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vendor_finance_sdk::error::InternalError;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
    /// let err = InternalError::from_source_with_context(
    ///     Box::new(io_err),
    ///     "Unable to write entry".to_string(),
    /// );
    /// assert_eq!(err.to_string(), "Unable to write entry: disk gone");
    /// ```
    pub fn from_source_with_context(
        source: Box<dyn error::Error + Send + Sync>,
        context: String,
    ) -> Self {
        Self {
            message: context,
            source: Some(source),
        }
    }
}

impl error::Error for InternalError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.source {
            Some(source) => {
                let source: &(dyn error::Error + 'static) = &**source;
                Some(source)
            }
            None => None,
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.message, source),
            None => f.write_str(&self.message),
        }
    }
}
