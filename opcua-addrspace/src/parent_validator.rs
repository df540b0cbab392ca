// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the Parent-Reference Validator (§4.E): which reference types
//! may connect a new node of a given class to a parent.

use opcua_addrspace_types::{ids, NodeClass, NodeId, StatusCode};

use crate::node_store::NodeStore;
use crate::type_hierarchy::is_node_in_tree;

/// Validate that `reference_type_id` may connect `parent_id` to a new node
/// of class `new_node_class`, per the ordered rules of §4.E.
///
/// Objects are exempt entirely when both `parent_id` and `reference_type_id`
/// are null (an orphan object is permitted, scenario 1 of §8).
pub fn check_parent_reference(
    store: &NodeStore,
    new_node_class: NodeClass,
    parent_id: &NodeId,
    reference_type_id: &NodeId,
) -> Result<(), StatusCode> {
    if new_node_class == NodeClass::Object && parent_id.is_null() && reference_type_id.is_null() {
        return Ok(());
    }

    // Rule 1: parent must exist.
    let Some(parent) = store.get(parent_id) else {
        return Err(StatusCode::BadParentNodeIdInvalid);
    };

    // Rule 2: reference type id must resolve to a ReferenceType node.
    let Some(reference_type_node) = store.get(reference_type_id) else {
        return Err(StatusCode::BadReferenceTypeIdInvalid);
    };
    let Some(reference_type) = reference_type_node.as_reference_type() else {
        return Err(StatusCode::BadReferenceTypeIdInvalid);
    };

    // Rule 3: must not be abstract.
    if reference_type.is_abstract {
        return Err(StatusCode::BadReferenceNotAllowed);
    }

    // Rule 4: type-class new nodes must attach via hasSubtype to a
    // same-class parent.
    if new_node_class.is_type_class() {
        if *reference_type_id != ids::reference_type::HAS_SUBTYPE {
            return Err(StatusCode::BadReferenceNotAllowed);
        }
        if parent.node_class() != new_node_class {
            return Err(StatusCode::BadParentNodeIdInvalid);
        }
        return Ok(());
    }

    // Rule 5: otherwise the reference type must be a (non-strict) subtype
    // of HierarchicalReferences.
    if is_node_in_tree(
        store,
        reference_type_id,
        &[ids::reference_type::HIERARCHICAL_REFERENCES],
        &[ids::reference_type::HAS_SUBTYPE],
    ) {
        Ok(())
    } else {
        Err(StatusCode::BadReferenceTypeIdInvalid)
    }
}
