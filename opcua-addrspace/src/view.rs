// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `View`.

use opcua_addrspace_types::{LocalizedText, NodeClass, NodeId, QualifiedName};

use crate::base::{node_base_impl, Base};

/// A predefined, named subset of the address space.
#[derive(Debug, Clone)]
pub struct View {
    pub(crate) base: Base,
    pub contains_no_loops: bool,
    pub event_notifier: u8,
}

node_base_impl!(View);

impl View {
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            base: Base::new(NodeClass::View, node_id, browse_name, display_name),
            contains_no_loops: false,
            event_notifier: 0,
        }
    }
}
