// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the AddNode Orchestrator (§4.H): the public entry point that
//! inserts, validates, type-checks, instantiates and links a new node.

use log::debug;
use opcua_addrspace_types::{ids, ExpandedNodeId, NodeClass, NodeId, StatusCode};

use crate::address_space::{AddressSpace, InstantiationCallback};
use crate::node::NodeType;
use crate::parent_validator::check_parent_reference;
use crate::type_checker::type_check_node;

/// Insert `node` into the store, after validating its namespace index
/// against the configured count (§4.H `begin`). Returns the id actually
/// assigned — a null requested id is replaced with a fresh numeric one.
pub fn add_node_begin(space: &mut AddressSpace, node: NodeType) -> Result<NodeId, StatusCode> {
    if node.base().node_id().namespace >= space.namespace_count() {
        return Err(StatusCode::BadNodeIdInvalid);
    }
    space.store_mut().insert(node)
}

/// Validate, type-check, instantiate and link an already-inserted node
/// (§4.H `finish`). Any failure past step 1 deletes the node again, along
/// with every reference it picked up in the meantime.
pub fn add_node_finish(
    space: &mut AddressSpace,
    id: &NodeId,
    node_class: NodeClass,
    parent_id: Option<&NodeId>,
    reference_type_id: Option<&NodeId>,
    type_definition: Option<&NodeId>,
    callback: Option<&InstantiationCallback>,
) -> Result<(), StatusCode> {
    match add_node_finish_inner(
        space,
        id,
        node_class,
        parent_id,
        reference_type_id,
        type_definition,
        callback,
    ) {
        Ok(()) => Ok(()),
        Err(status) => {
            debug!("add_node: finish failed on {id} ({status}); rolling back");
            let _ = space.delete_node(id, true);
            Err(status)
        }
    }
}

fn add_node_finish_inner(
    space: &mut AddressSpace,
    id: &NodeId,
    node_class: NodeClass,
    parent_id: Option<&NodeId>,
    reference_type_id: Option<&NodeId>,
    type_definition: Option<&NodeId>,
    callback: Option<&InstantiationCallback>,
) -> Result<(), StatusCode> {
    let parent = parent_id.cloned().unwrap_or_else(NodeId::null);
    let reference_type = reference_type_id.cloned().unwrap_or_else(NodeId::null);

    // Step 1: parent-reference validation, unless this is a parentless Object.
    let parentless_object =
        node_class == NodeClass::Object && parent.is_null() && reference_type.is_null();
    if !parentless_object {
        check_parent_reference(space.store(), node_class, &parent, &reference_type)?;
    }

    // Step 2: default the type definition for Variable/Object.
    let type_definition = type_definition.cloned().unwrap_or_else(NodeId::null);
    let type_definition = if type_definition.is_null() {
        match node_class {
            NodeClass::Variable => ids::variable_type::BASE_DATA_VARIABLE_TYPE,
            NodeClass::Object => ids::object_type::BASE_OBJECT_TYPE,
            _ => type_definition,
        }
    } else {
        type_definition
    };

    // Step 3: type-check Variable/VariableType nodes. A VariableType's
    // supertype is its parent (connected via hasSubtype), not `typeDefinition`
    // — only a Variable instance is checked against the latter.
    match node_class {
        NodeClass::Variable => {
            type_check_node(space.store_mut(), id, &type_definition)?;
        }
        NodeClass::VariableType => {
            type_check_node(space.store_mut(), id, &parent)?;
        }
        _ => {}
    }

    // Step 4: instantiate — copies type members, runs the constructor,
    // attaches hasTypeDefinition. A no-op for classes other than Object/Variable.
    crate::instantiate::instantiate(space, id, node_class, &type_definition, callback)?;

    // Step 5: link to the parent. The edge is added inverse-first on the new
    // node (it "points at" its parent); the reference service's bidirectional
    // logic adds the matching forward half on the parent.
    if !parent.is_null() {
        space.add_reference(id, &reference_type, &ExpandedNodeId::from(parent), false)?;
    }

    Ok(())
}

/// `begin` + `finish` in one call, cleaning up the inserted node if
/// `finish` fails.
pub fn add_node(
    space: &mut AddressSpace,
    node: NodeType,
    parent_id: Option<&NodeId>,
    reference_type_id: Option<&NodeId>,
    type_definition: Option<&NodeId>,
    callback: Option<&InstantiationCallback>,
) -> Result<NodeId, StatusCode> {
    let node_class = node.node_class();
    let id = add_node_begin(space, node)?;
    add_node_finish(
        space,
        &id,
        node_class,
        parent_id,
        reference_type_id,
        type_definition,
        callback,
    )?;
    Ok(id)
}
