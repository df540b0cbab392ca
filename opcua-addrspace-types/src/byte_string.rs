// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `ByteString`.

use base64::Engine;

/// An opaque sequence of bytes, used as one of the four [`crate::NodeId`] identifier
/// kinds and as a possible [`crate::Variant`] payload.
#[derive(Eq, PartialEq, Clone, Debug, Hash, Default)]
pub struct ByteString {
    value: Option<Vec<u8>>,
}

impl From<Vec<u8>> for ByteString {
    fn from(value: Vec<u8>) -> Self {
        Self { value: Some(value) }
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        Self {
            value: Some(value.to_vec()),
        }
    }
}

impl ByteString {
    /// A null (as opposed to empty) byte string.
    pub fn null() -> Self {
        Self { value: None }
    }

    /// Returns true if this byte string is null.
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the contained bytes, if any.
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_deref().unwrap_or(&[])
    }

    /// Encode the contained bytes as base64, mainly used for `Display`/debug output.
    pub fn as_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.as_bytes())
    }

    /// Decode a base64 string into a `ByteString`.
    pub fn from_base64(s: &str) -> Option<Self> {
        base64::engine::general_purpose::STANDARD
            .decode(s)
            .ok()
            .map(Self::from)
    }
}
