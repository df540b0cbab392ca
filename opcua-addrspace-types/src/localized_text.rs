// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `LocalizedText`.

use std::fmt;

use crate::string::UAString;

/// Human-readable text tagged with an optional IETF locale, e.g. `en-US`.
/// Used for `displayName` and `description`.
#[derive(Eq, PartialEq, Clone, Debug, Hash, Default)]
pub struct LocalizedText {
    /// The locale of `text`, if known.
    pub locale: UAString,
    /// The text itself.
    pub text: UAString,
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self {
            locale: UAString::null(),
            text: text.into(),
        }
    }
}

impl LocalizedText {
    /// Construct localized text with an explicit locale.
    pub fn new(locale: &str, text: &str) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }
}
