// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `Variant`.
//!
//! The full wire-level `Variant` supports two dozen built-in scalar types
//! plus matrices; encoding/decoding it is the wire-codec layer's job (§1
//! Non-goals). The type checker (§4.F) only needs to know a value's runtime
//! data type and its array-ness, so this is a deliberately small subset of
//! the built-in scalar types, enough to exercise `compatibleValueRanks` and
//! the default-value synthesis the spec describes.

use crate::byte_string::ByteString;
use crate::ids::data_type;
use crate::localized_text::LocalizedText;
use crate::node_id::NodeId;
use crate::qualified_name::QualifiedName;
use crate::string::UAString;

/// A scalar value held by a [`Variant`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Boolean(bool),
    Byte(u8),
    Int32(i32),
    UInt32(u32),
    Double(f64),
    String(UAString),
    NodeId(NodeId),
    QualifiedName(QualifiedName),
    LocalizedText(LocalizedText),
    ByteString(ByteString),
}

impl ScalarValue {
    /// The namespace-zero data type id a server would publish this scalar
    /// under, used by the type checker's `compatibleValueRanks` rejection
    /// and the `typeCheckValue` coercion pass.
    pub fn data_type_id(&self) -> NodeId {
        match self {
            ScalarValue::Boolean(_) => data_type::BOOLEAN,
            ScalarValue::Byte(_) => data_type::BYTE,
            ScalarValue::Int32(_) => data_type::INT32,
            ScalarValue::UInt32(_) => data_type::UINT32,
            ScalarValue::Double(_) => data_type::DOUBLE,
            ScalarValue::String(_) => data_type::STRING,
            ScalarValue::NodeId(_) => NodeId::ns0(17),
            ScalarValue::QualifiedName(_) => NodeId::ns0(20),
            ScalarValue::LocalizedText(_) => NodeId::ns0(21),
            ScalarValue::ByteString(_) => NodeId::ns0(15),
        }
    }
}

/// A variant-typed value, as carried in a Variable or VariableType node's
/// `Value` attribute.
///
/// `Empty` models the "no value set" case the type checker treats specially
/// (§4.F step 5, null-value synthesis); `Scalar` and `Array` are otherwise
/// the only two shapes `compatibleValueRankArrayDimensions` (§4.F step 9)
/// needs to distinguish.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Variant {
    #[default]
    Empty,
    Scalar(ScalarValue),
    Array {
        values: Vec<ScalarValue>,
        /// Length of each dimension, outermost first. Empty means a single
        /// unconstrained dimension (`ValueRank` == 1).
        dimensions: Vec<u32>,
    },
}

impl Variant {
    /// True if this is a single scalar, i.e. the effective value rank is
    /// [`crate::value_rank::SCALAR`].
    pub fn is_scalar(&self) -> bool {
        matches!(self, Variant::Scalar(_))
    }

    /// True if this is an array of any rank.
    pub fn is_array(&self) -> bool {
        matches!(self, Variant::Array { .. })
    }

    /// The data type id of the contained value(s), if any is set. An empty
    /// array reports `None` since it carries no element to inspect.
    pub fn data_type_id(&self) -> Option<NodeId> {
        match self {
            Variant::Empty => None,
            Variant::Scalar(v) => Some(v.data_type_id()),
            Variant::Array { values, .. } => values.first().map(|v| v.data_type_id()),
        }
    }

    /// The `ArrayDimensions` this value would publish: empty for a scalar or
    /// an empty value, otherwise the array's own dimensions.
    pub fn array_dimensions(&self) -> Vec<u32> {
        match self {
            Variant::Array { dimensions, .. } => dimensions.clone(),
            _ => Vec::new(),
        }
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Variant::Scalar(ScalarValue::Boolean(v))
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Variant::Scalar(ScalarValue::Int32(v))
    }
}

impl From<u32> for Variant {
    fn from(v: u32) -> Self {
        Variant::Scalar(ScalarValue::UInt32(v))
    }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Variant::Scalar(ScalarValue::Double(v))
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Variant::Scalar(ScalarValue::String(v.into()))
    }
}

impl From<NodeId> for Variant {
    fn from(v: NodeId) -> Self {
        Variant::Scalar(ScalarValue::NodeId(v))
    }
}
