// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `UAString`.

use std::fmt;

/// A UTF-8 string that distinguishes "null" (absent) from "empty".
///
/// The OPC UA wire format keeps this distinction; it also matters for
/// [`crate::QualifiedName`]/[`crate::NodeId`] string identifiers, where a
/// null string is not the same as an empty one.
#[derive(Eq, PartialEq, Clone, Debug, Hash, Default)]
pub struct UAString {
    value: Option<String>,
}

impl fmt::Display for UAString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value.as_deref().unwrap_or(""))
    }
}

impl From<&str> for UAString {
    fn from(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }
}

impl From<String> for UAString {
    fn from(value: String) -> Self {
        Self { value: Some(value) }
    }
}

impl UAString {
    /// A null string.
    pub fn null() -> Self {
        Self { value: None }
    }

    /// Returns true if this is the null string.
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the string value, if any.
    pub fn as_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}
