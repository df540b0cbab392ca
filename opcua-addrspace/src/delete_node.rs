// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the DeleteNode Orchestrator (§4.I).

use log::debug;
use opcua_addrspace_types::{ids, ExpandedNodeId, NodeClass, NodeId, StatusCode};

use crate::address_space::AddressSpace;
use crate::reference_index::delete_one_way;

/// Remove node `id` from the address space.
///
/// For Object nodes, first invokes the destructor of every ObjectType
/// reachable via an inverse `HasSubtype` edge *from the node itself*
/// (matching the source's literal browse target, not its type
/// definition — preserved as observed, §9). If `delete_references` is set,
/// every outgoing edge is mirrored with a best-effort peer-side delete; no
/// consistency check is performed (§9 open question, preserved).
pub fn delete_node(
    space: &mut AddressSpace,
    id: &NodeId,
    delete_references: bool,
) -> Result<(), StatusCode> {
    let Some(node) = space.store().get(id) else {
        return Err(StatusCode::BadNodeIdUnknown);
    };
    let node_class = node.node_class();
    let edges = node.references().to_vec();
    let instance_handle = node.as_object().and_then(|o| o.instance_handle);

    if node_class == NodeClass::Object {
        run_destructors(space, id, instance_handle);
    }

    if delete_references {
        let target_back = ExpandedNodeId::from(id.clone());
        for edge in &edges {
            let Some(peer_id) = edge.target.as_node_id().cloned() else {
                continue;
            };
            // The peer's copy of this edge has the opposite orientation;
            // only it is removed since the node being deleted is about to
            // vanish from the store wholesale.
            let result = space.store_mut().edit(&peer_id, |peer| {
                delete_one_way(peer, &edge.reference_type_id, &target_back, !edge.is_inverse)
            });
            if let Err(status) = result {
                debug!("delete_node: peer {peer_id} had no matching edge back to {id} ({status})");
            }
        }
    }

    space.store_mut().remove(id);
    Ok(())
}

fn run_destructors(space: &mut AddressSpace, id: &NodeId, instance_handle: Option<u64>) {
    let Some(node) = space.store().get(id) else {
        return;
    };
    let supertype_ids: Vec<NodeId> = node
        .references()
        .iter()
        .filter(|edge| edge.is_inverse && edge.reference_type_id == ids::reference_type::HAS_SUBTYPE)
        .filter_map(|edge| edge.target.as_node_id().cloned())
        .collect();

    for type_id in supertype_ids {
        let Some(type_node) = space.store().get(&type_id) else {
            continue;
        };
        let Some(object_type) = type_node.as_object_type() else {
            continue;
        };
        if let Some(destructor) = object_type.lifecycle.destructor.clone() {
            debug!("delete_node: running destructor of {type_id} on {id}");
            destructor(id, instance_handle);
        }
    }
}
