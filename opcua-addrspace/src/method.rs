// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `Method`.

use std::sync::Arc;

use opcua_addrspace_types::{LocalizedText, NodeClass, NodeId, QualifiedName, StatusCode, Variant};

use crate::base::{node_base_impl, Base};

/// Invoked when a client calls this method; out of scope for this core to
/// execute (§1 Non-goals list method invocation as a collaborator's job),
/// but the node still carries the hook so `addMethodNode` (§6) can attach
/// one.
pub type MethodCallback =
    Arc<dyn Fn(&NodeId, &[Variant]) -> Result<Vec<Variant>, StatusCode> + Send + Sync>;

/// A callable member of the address space.
#[derive(Clone)]
pub struct Method {
    pub(crate) base: Base,
    pub executable: bool,
    pub attached_method: Option<MethodCallback>,
    pub method_handle: Option<u64>,
}

impl std::fmt::Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Method")
            .field("base", &self.base)
            .field("executable", &self.executable)
            .field("attached_method", &self.attached_method.is_some())
            .field("method_handle", &self.method_handle)
            .finish()
    }
}

node_base_impl!(Method);

impl Method {
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            base: Base::new(NodeClass::Method, node_id, browse_name, display_name),
            executable: true,
            attached_method: None,
            method_handle: None,
        }
    }
}
