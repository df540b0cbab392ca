// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `VariableType`.

use opcua_addrspace_types::{LocalizedText, NodeClass, NodeId, QualifiedName};

use crate::base::{node_base_impl, Base};
use crate::value::ValueAttributes;

/// The type of a variable. Carries the same value-shape fields as
/// `Variable` (§3); the type checker (§4.F) validates a variable's own
/// `dataType`/`valueRank`/`arrayDimensions` against these.
#[derive(Debug, Clone)]
pub struct VariableType {
    pub(crate) base: Base,
    pub value_attrs: ValueAttributes,
    pub is_abstract: bool,
}

node_base_impl!(VariableType);

impl VariableType {
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            base: Base::new(NodeClass::VariableType, node_id, browse_name, display_name),
            value_attrs: ValueAttributes::default(),
            is_abstract: false,
        }
    }

    pub fn data_type(&self) -> &NodeId {
        &self.value_attrs.data_type
    }

    pub fn value_rank(&self) -> i32 {
        self.value_attrs.value_rank
    }

    pub fn array_dimensions(&self) -> &[u32] {
        &self.value_attrs.array_dimensions
    }
}
