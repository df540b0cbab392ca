// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `Variable`.

use opcua_addrspace_types::{AccessLevel, LocalizedText, NodeClass, NodeId, QualifiedName};

use crate::base::{node_base_impl, Base};
use crate::value::ValueAttributes;

/// A node carrying a current value, type-checked against its declared
/// `VariableType` (§4.F).
#[derive(Debug, Clone)]
pub struct Variable {
    pub(crate) base: Base,
    pub value_attrs: ValueAttributes,
    pub access_level: AccessLevel,
    pub user_access_level: AccessLevel,
    pub historizing: bool,
    pub minimum_sampling_interval: f64,
}

node_base_impl!(Variable);

impl Variable {
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            base: Base::new(NodeClass::Variable, node_id, browse_name, display_name),
            value_attrs: ValueAttributes::default(),
            access_level: AccessLevel::CURRENT_READ,
            user_access_level: AccessLevel::CURRENT_READ,
            historizing: false,
            minimum_sampling_interval: 0.0,
        }
    }

    pub fn data_type(&self) -> &NodeId {
        &self.value_attrs.data_type
    }

    pub fn set_data_type(&mut self, data_type: NodeId) {
        self.value_attrs.data_type = data_type;
    }

    pub fn value_rank(&self) -> i32 {
        self.value_attrs.value_rank
    }

    pub fn set_value_rank(&mut self, value_rank: i32) {
        self.value_attrs.value_rank = value_rank;
    }

    pub fn array_dimensions(&self) -> &[u32] {
        &self.value_attrs.array_dimensions
    }
}
