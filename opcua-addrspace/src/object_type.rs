// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `ObjectType`.

use opcua_addrspace_types::{LocalizedText, NodeClass, NodeId, QualifiedName};

use crate::base::{node_base_impl, Base};
use crate::lifecycle::Lifecycle;

/// The type of an Object. Carries the constructor/destructor pair the
/// instantiator and delete orchestrator invoke for its instances (§4.G,
/// §4.I).
#[derive(Debug, Clone)]
pub struct ObjectType {
    pub(crate) base: Base,
    pub is_abstract: bool,
    pub lifecycle: Lifecycle,
}

node_base_impl!(ObjectType);

impl ObjectType {
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            base: Base::new(NodeClass::ObjectType, node_id, browse_name, display_name),
            is_abstract: false,
            lifecycle: Lifecycle::default(),
        }
    }
}
