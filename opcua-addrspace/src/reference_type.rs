// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `ReferenceType`.

use opcua_addrspace_types::{LocalizedText, NodeClass, NodeId, QualifiedName};

use crate::base::{node_base_impl, Base};

/// The type of a reference edge. Organized, like every other type class,
/// into a subtype tree rooted at `References` (§4.D); the parent-reference
/// validator (§4.E) and reference index both look nodes of this class up by
/// id to check abstractness and the hierarchical-references closure.
#[derive(Debug, Clone)]
pub struct ReferenceType {
    pub(crate) base: Base,
    pub is_abstract: bool,
    pub symmetric: bool,
    pub inverse_name: Option<LocalizedText>,
}

node_base_impl!(ReferenceType);

impl ReferenceType {
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
        symmetric: bool,
        inverse_name: Option<LocalizedText>,
    ) -> Self {
        Self {
            base: Base::new(NodeClass::ReferenceType, node_id, browse_name, display_name),
            is_abstract: false,
            symmetric,
            inverse_name,
        }
    }
}
