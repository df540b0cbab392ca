// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `Object`.

use opcua_addrspace_types::{LocalizedText, NodeClass, NodeId, QualifiedName};

use crate::base::{node_base_impl, Base};

/// An instance node with no value of its own, used to group other nodes
/// (§3). `instance_handle` is the opaque value returned by its type's
/// constructor during instantiation (§4.G step 4), consulted again by the
/// destructor on delete (§4.I).
#[derive(Debug, Clone)]
pub struct Object {
    pub(crate) base: Base,
    pub event_notifier: u8,
    pub instance_handle: Option<u64>,
}

node_base_impl!(Object);

impl Object {
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            base: Base::new(NodeClass::Object, node_id, browse_name, display_name),
            event_notifier: 0,
            instance_handle: None,
        }
    }
}
