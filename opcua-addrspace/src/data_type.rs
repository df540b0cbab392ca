// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `DataType`.

use opcua_addrspace_types::{LocalizedText, NodeClass, NodeId, QualifiedName};

use crate::base::{node_base_impl, Base};

/// The type of a variable's value. Forms its own `HasSubtype` tree rooted at
/// `BaseDataType`, walked by the type checker (§4.F step 4) when checking a
/// variable's declared `dataType` against its variable type's.
#[derive(Debug, Clone)]
pub struct DataType {
    pub(crate) base: Base,
    pub is_abstract: bool,
}

node_base_impl!(DataType);

impl DataType {
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            base: Base::new(NodeClass::DataType, node_id, browse_name, display_name),
            is_abstract: false,
        }
    }
}
