// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the Reference Service (§4.C): `addReference`/`deleteReference`
//! with two-sided atomicity and rollback.

use log::{error, warn};
use opcua_addrspace_types::{ExpandedNodeId, NodeId, StatusCode};

use crate::node_store::NodeStore;
use crate::reference_index::{add_one_way, delete_one_way};

/// Add a reference from `source` to `target`, maintaining invariant 3 of
/// §3 (bidirectional symmetry) by also adding the matching inverse edge on
/// `target`.
///
/// Non-local targets (`target.server_index != 0`) are rejected outright:
/// resolving them is an external-namespace collaborator's job, out of
/// scope here (§1).
pub fn add_reference(
    store: &mut NodeStore,
    source: &NodeId,
    reference_type_id: &NodeId,
    target: &ExpandedNodeId,
    is_forward: bool,
) -> Result<(), StatusCode> {
    if !target.is_local() {
        warn!("add_reference: non-local target {target} not implemented");
        return Err(StatusCode::BadNotImplemented);
    }
    let target_id = target.as_node_id().expect("checked is_local above").clone();

    store.edit(source, |node| {
        add_one_way(
            node,
            reference_type_id.clone(),
            target.clone(),
            !is_forward,
        );
        Ok(())
    })?;

    let source_expanded = ExpandedNodeId::from(source.clone());
    let inverse_result = store.edit(&target_id, |node| {
        add_one_way(node, reference_type_id.clone(), source_expanded, is_forward);
        Ok(())
    });

    if let Err(status) = inverse_result {
        error!(
            "add_reference: inverse edge on {target_id} failed ({status}); rolling back source edge"
        );
        let _ = store.edit(source, |node| {
            delete_one_way(node, reference_type_id, target, !is_forward)
        });
        return Err(status);
    }
    Ok(())
}

/// Remove the source-side edge; if `delete_bidirectional` and `target` is
/// local, also remove the peer's matching edge. One side missing the other
/// is logged but not treated as fatal, matching the source's documented
/// permissive behavior (§9 open question).
pub fn delete_reference(
    store: &mut NodeStore,
    source: &NodeId,
    reference_type_id: &NodeId,
    target: &ExpandedNodeId,
    is_forward: bool,
    delete_bidirectional: bool,
) -> StatusCode {
    let source_result = store.edit(source, |node| {
        delete_one_way(node, reference_type_id, target, !is_forward)
    });
    let source_status = source_result.err().unwrap_or(StatusCode::Good);

    if !delete_bidirectional {
        return source_status;
    }
    let Some(target_id) = target.as_node_id().cloned() else {
        return source_status;
    };
    let source_expanded = ExpandedNodeId::from(source.clone());
    let target_result = store.edit(&target_id, |node| {
        delete_one_way(node, reference_type_id, &source_expanded, is_forward)
    });
    if let Err(status) = target_result {
        warn!("delete_reference: peer edge on {target_id} was already absent ({status})");
    }
    source_status
}
