// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the Instantiator (§4.G): copies a type's aggregated children
//! (and its supertypes') into a new instance, merging with any that
//! already exist.

use log::debug;
use opcua_addrspace_types::{ids, ExpandedNodeId, NodeClass, NodeId, QualifiedName, StatusCode};

use crate::address_space::{AddressSpace, InstantiationCallback};
use crate::reference::ReferenceEdge;
use crate::type_hierarchy::type_hierarchy;

/// Instantiate `new_node_id` (an Object or Variable) from `type_id`.
/// A no-op returning `Ok` for every other node class (§4.G intro).
pub fn instantiate(
    space: &mut AddressSpace,
    new_node_id: &NodeId,
    node_class: NodeClass,
    type_id: &NodeId,
    callback: Option<&InstantiationCallback>,
) -> Result<(), StatusCode> {
    if node_class != NodeClass::Object && node_class != NodeClass::Variable {
        return Ok(());
    }

    // Step 1: resolve the type node and check its class/abstractness.
    let Some(type_node) = space.store().get(type_id) else {
        return Err(StatusCode::BadTypeDefinitionInvalid);
    };
    let type_ok = match node_class {
        NodeClass::Variable => type_node
            .as_variable_type()
            .map(|vt| !vt.is_abstract)
            .unwrap_or(false),
        NodeClass::Object => type_node
            .as_object_type()
            .map(|ot| !ot.is_abstract)
            .unwrap_or(false),
        _ => unreachable!(),
    };
    if !type_ok {
        return Err(StatusCode::BadTypeDefinitionInvalid);
    }

    // Step 2: supertype chain, most-derived first.
    let hierarchy = type_hierarchy(space.store(), type_id, true);

    // Step 3: copy members of the type and all supertypes, most-derived
    // first so its children win the browseName merge over ancestors'.
    for ancestor in &hierarchy {
        copy_children(space, ancestor, new_node_id)?;
    }

    // Step 4: run the constructor, if the type is an ObjectType that has one.
    let constructor = space
        .store()
        .get(type_id)
        .and_then(|n| n.as_object_type())
        .and_then(|ot| ot.lifecycle.constructor.clone());
    if let Some(constructor) = constructor {
        let handle = constructor(new_node_id)?;
        debug!("instantiate: constructor of {type_id} produced handle {handle} for {new_node_id}");
        space.store_mut().edit(new_node_id, |node| {
            if let Some(object) = node.as_object_mut() {
                if object.instance_handle.is_none() {
                    object.instance_handle = Some(handle);
                }
            }
            Ok(())
        })?;
    }

    // Step 5: attach hasTypeDefinition.
    space.add_reference(
        new_node_id,
        &ids::reference_type::HAS_TYPE_DEFINITION,
        &ExpandedNodeId::from(type_id.clone()),
        true,
    )?;

    // Step 6: fire the user-supplied instantiation callback.
    if let Some(callback) = callback {
        callback(new_node_id, type_id);
    }

    Ok(())
}

/// One child discovered under `src` along the Aggregates closure.
struct AggregateChild {
    reference_type_id: NodeId,
    node_id: NodeId,
    node_class: NodeClass,
    browse_name: QualifiedName,
}

fn aggregate_children(space: &AddressSpace, owner: &NodeId) -> Vec<AggregateChild> {
    let Some(node) = space.store().get(owner) else {
        return Vec::new();
    };
    node.references()
        .iter()
        .filter(|edge| edge.is_forward())
        .filter(|edge| {
            crate::type_hierarchy::is_node_in_tree(
                space.store(),
                &edge.reference_type_id,
                &[ids::reference_type::AGGREGATES],
                &[ids::reference_type::HAS_SUBTYPE],
            )
        })
        .filter_map(|edge| {
            let child_id = edge.target.as_node_id()?;
            let child = space.store().get(child_id)?;
            let class = child.node_class();
            (class == NodeClass::Object || class == NodeClass::Variable || class == NodeClass::Method)
                .then(|| AggregateChild {
                    reference_type_id: edge.reference_type_id.clone(),
                    node_id: child_id.clone(),
                    node_class: class,
                    browse_name: child.base().browse_name().clone(),
                })
        })
        .collect()
}

/// Deep-merge `src`'s aggregated Object/Variable/Method children into
/// `dst` (§4.G `copyChildren`). Existing same-browseName children are
/// never overwritten, only recursed into to pick up missing grandchildren.
pub fn copy_children(space: &mut AddressSpace, src: &NodeId, dst: &NodeId) -> Result<(), StatusCode> {
    let src_children = aggregate_children(space, src);
    let dst_namespace = space
        .store()
        .get(dst)
        .map(|n| n.base().node_id().namespace)
        .unwrap_or(0);

    for child in src_children {
        let existing = aggregate_children(space, dst)
            .into_iter()
            .find(|c| c.browse_name == child.browse_name);

        match existing {
            None => {
                if child.node_class == NodeClass::Method {
                    space.add_reference(
                        dst,
                        &child.reference_type_id,
                        &ExpandedNodeId::from(child.node_id.clone()),
                        true,
                    )?;
                } else {
                    add_cloned_child(space, &child, dst, dst_namespace)?;
                }
            }
            Some(existing) if matches!(existing.node_class, NodeClass::Object | NodeClass::Variable) => {
                copy_children(space, &child.node_id, &existing.node_id)?;
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn add_cloned_child(
    space: &mut AddressSpace,
    child: &AggregateChild,
    dst: &NodeId,
    dst_namespace: u16,
) -> Result<(), StatusCode> {
    let Some(mut cloned) = space.store().get_copy(&child.node_id) else {
        return Err(StatusCode::BadNodeIdUnknown);
    };
    cloned.base_mut().set_node_id(NodeId::new(dst_namespace, 0u32));
    // Clear the clone's own adjacency: it is re-entering AddNode fresh and
    // will collect new edges (parent, type definition, its own members).
    *cloned.base_mut().references_mut() = Vec::<ReferenceEdge>::new();

    let type_definition = type_definition_of(space, &child.node_id);

    crate::add_node::add_node(
        space,
        cloned,
        Some(dst),
        Some(&child.reference_type_id),
        type_definition.as_ref(),
        None,
    )?;
    Ok(())
}

fn type_definition_of(space: &AddressSpace, node_id: &NodeId) -> Option<NodeId> {
    let node = space.store().get(node_id)?;
    node.references()
        .iter()
        .find(|edge| edge.is_forward() && edge.reference_type_id == ids::reference_type::HAS_TYPE_DEFINITION)
        .and_then(|edge| edge.target.as_node_id().cloned())
}
