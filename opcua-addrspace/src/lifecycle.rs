// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Object-type lifecycle hooks: the constructor/destructor pair invoked by
//! the instantiator (§4.G step 4) and the delete orchestrator (§4.I).
//!
//! The original source passes these as untyped function pointers plus a
//! context `void*`; here they're plain `Fn` trait objects behind `Arc` so a
//! type's lifecycle can be cloned along with the node (`getCopy`, §4.A) and
//! shared across instances without unsafe casts.

use std::sync::Arc;

use opcua_addrspace_types::{NodeId, StatusCode};

/// Invoked once per instantiation, returns the opaque handle stored as the
/// new Object's `instance_handle`.
pub type Constructor = Arc<dyn Fn(&NodeId) -> Result<u64, StatusCode> + Send + Sync>;

/// Invoked once per instance, per ObjectType reachable via inverse
/// `HasSubtype` from the instance's own type (§4.I); never fails.
pub type Destructor = Arc<dyn Fn(&NodeId, Option<u64>) + Send + Sync>;

/// The constructor/destructor pair attached to an `ObjectType` node.
#[derive(Clone, Default)]
pub struct Lifecycle {
    pub constructor: Option<Constructor>,
    pub destructor: Option<Destructor>,
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("constructor", &self.constructor.is_some())
            .field("destructor", &self.destructor.is_some())
            .finish()
    }
}
