// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `StatusCode`.
//!
//! The full OPC UA status code space is a generated table of several hundred
//! constants; it belongs to the wire-codec layer (§1 Non-goals). This module
//! carries only the status-code taxonomy the address-space core actually
//! returns (§7), modeled the same way upstream does: a `u32` newtype with a
//! severity encoded in its top two bits and named constants for each code.

use std::fmt;

/// A result code returned by address-space operations.
///
/// Severity is encoded in the top two bits, mirroring the wire format: `00`
/// is Good, `01` is Uncertain, `10`/`11` is Bad. [`StatusCode::is_good`] and
/// [`StatusCode::is_bad`] inspect those bits directly so that new Bad/Uncertain
/// codes can be added without touching the severity logic.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub struct StatusCode(pub u32);

const SEVERITY_MASK: u32 = 0xC000_0000;
const SEVERITY_UNCERTAIN: u32 = 0x4000_0000;
const SEVERITY_BAD: u32 = 0x8000_0000;

macro_rules! status_codes {
    ($($name:ident = $value:expr, $doc:expr;)*) => {
        impl StatusCode {
            $(
                #[doc = $doc]
                pub const $name: StatusCode = StatusCode($value);
            )*

            /// Human-readable name of this status code, for logging.
            pub fn name(self) -> &'static str {
                match self {
                    $(StatusCode::$name => stringify!($name),)*
                    _ => "Unknown",
                }
            }
        }
    };
}

status_codes! {
    Good = 0x0000_0000, "The operation succeeded.";
    BadUnexpectedError = SEVERITY_BAD | 0x0001, "An unexpected error occurred.";
    BadOutOfMemory = SEVERITY_BAD | 0x0002, "Not enough memory to complete the operation.";
    BadNotImplemented = SEVERITY_BAD | 0x0003, "The operation is not implemented.";
    BadNothingToDo = SEVERITY_BAD | 0x0004, "The request contained no items to act on.";
    BadNodeIdInvalid = SEVERITY_BAD | 0x0010, "The node id refers to a node that does not exist in the server address space.";
    BadNodeIdUnknown = SEVERITY_BAD | 0x0011, "The node id refers to a node that is not valid for the operation.";
    BadNodeClassInvalid = SEVERITY_BAD | 0x0012, "The node class is not correct for the operation.";
    BadParentNodeIdInvalid = SEVERITY_BAD | 0x0013, "The parent node id does not refer to a valid node.";
    BadReferenceTypeIdInvalid = SEVERITY_BAD | 0x0014, "The reference type id does not refer to a valid reference type node.";
    BadReferenceNotAllowed = SEVERITY_BAD | 0x0015, "The reference type is not allowed for the given node classes.";
    BadTypeDefinitionInvalid = SEVERITY_BAD | 0x0016, "The type definition node id does not reference an appropriate type node.";
    BadTypeMismatch = SEVERITY_BAD | 0x0017, "The value supplied for an attribute is not compatible with the data type of the attribute.";
    BadNodeAttributesInvalid = SEVERITY_BAD | 0x0018, "The node attributes are not valid for the node class.";
    BadIdExists = SEVERITY_BAD | 0x0019, "The requested node id already exists in the address space.";
    BadNodeNotFound = SEVERITY_BAD | 0x001A, "The node could not be found.";
    BadNotFound = SEVERITY_BAD | 0x001B, "The requested item could not be found, or the relevant data is not part of this object.";
    BadInvalidArgument = SEVERITY_BAD | 0x001C, "One or more arguments are invalid.";
    BadSourceNodeIdInvalid = SEVERITY_BAD | 0x001D, "The source node id does not refer to a valid node.";
    BadTargetNodeIdInvalid = SEVERITY_BAD | 0x001E, "The target node id does not refer to a valid node.";
    BadDuplicateReferenceNotAllowed = SEVERITY_BAD | 0x001F, "The reference type between the nodes is already defined.";
    BadInvalidSelfReference = SEVERITY_BAD | 0x0020, "The server does not allow this node to be used as a target for this reference type.";
    UncertainReferenceNotDeleted = SEVERITY_UNCERTAIN | 0x0001, "The server was not able to delete the requested reference, but the operation is not fatal.";
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (0x{:08X})", self.name(), self.0)
    }
}

impl std::error::Error for StatusCode {}

impl StatusCode {
    /// Returns true if this code carries the "Good" severity.
    pub fn is_good(self) -> bool {
        self.0 & SEVERITY_MASK == 0
    }

    /// Returns true if this code carries the "Bad" severity.
    pub fn is_bad(self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_BAD
    }

    /// Returns true if this code carries the "Uncertain" severity.
    pub fn is_uncertain(self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_UNCERTAIN
    }

    /// Fold a sequence of statuses down to the first non-good one, or `Good`
    /// if all succeeded. Mirrors the "bitwise-or-of-badness" propagation
    /// policy described in §7: any non-good status wins.
    pub fn first_error(codes: impl IntoIterator<Item = StatusCode>) -> StatusCode {
        for code in codes {
            if !code.is_good() {
                return code;
            }
        }
        StatusCode::Good
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        StatusCode::Good
    }
}
