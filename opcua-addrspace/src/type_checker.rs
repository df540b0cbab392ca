// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the Type Checker (§4.F): validates a Variable/VariableType's
//! `dataType`/`valueRank`/`arrayDimensions`/value against its declared
//! variable type.

use log::{debug, warn};
use opcua_addrspace_types::{ids, value_rank, NodeClass, NodeId, ScalarValue, StatusCode, Variant};

use crate::node::NodeType;
use crate::node_store::NodeStore;
use crate::type_hierarchy::is_node_in_tree;
use crate::value::ValueAttributes;

/// Run the type checker against node `id`, whose declared type definition
/// is `type_definition`. Applies to both Variable and VariableType nodes;
/// a no-op for every other class.
///
/// Temporarily removes the node from `store` so the subtype-closure checks
/// below can borrow `store` read-only while still holding a mutable
/// reference to the node being checked, then puts it back regardless of
/// the outcome.
pub fn type_check_node(
    store: &mut NodeStore,
    id: &NodeId,
    type_definition: &NodeId,
) -> Result<(), StatusCode> {
    let Some(mut node) = store.remove(id) else {
        return Err(StatusCode::BadNodeIdUnknown);
    };
    let result = type_check_inner(store, &mut node, type_definition);
    store.reinsert(id.clone(), node);
    result
}

fn type_check_inner(
    store: &NodeStore,
    node: &mut NodeType,
    type_definition: &NodeId,
) -> Result<(), StatusCode> {
    let node_class = node.node_class();
    let is_variable = match node_class {
        NodeClass::Variable => true,
        NodeClass::VariableType => false,
        _ => return Ok(()),
    };
    let node_id = node.base().node_id().clone();

    // Step 1: default a null dataType to BaseDataType.
    if value_attrs_mut(node).expect("checked node_class above").data_type.is_null() {
        debug!("type_check: defaulting null dataType to BaseDataType on {node_id}");
        value_attrs_mut(node).expect("checked node_class above").data_type =
            ids::data_type::BASE_DATA_TYPE;
    }

    // Step 2: BaseDataVariableType is the bootstrap of the standard
    // namespace and exempt from checking against itself.
    if node_id == ids::variable_type::BASE_DATA_VARIABLE_TYPE {
        return Ok(());
    }

    // Step 3: resolve the VariableType.
    let Some(vt_node) = store.get(type_definition) else {
        return Err(StatusCode::BadTypeDefinitionInvalid);
    };
    let Some(vt) = vt_node.as_variable_type() else {
        return Err(StatusCode::BadTypeDefinitionInvalid);
    };
    if is_variable && vt.is_abstract {
        return Err(StatusCode::BadTypeDefinitionInvalid);
    }
    let vt_data_type = vt.data_type().clone();
    let vt_value_rank = vt.value_rank();
    let vt_array_dimensions = vt.array_dimensions().to_vec();

    // Step 4: dataType must be a (non-strict) subtype of the VT's dataType.
    let node_data_type = value_attrs_mut(node).expect("checked node_class above").data_type.clone();
    if !is_node_in_tree(
        store,
        &node_data_type,
        &[vt_data_type],
        &[ids::reference_type::HAS_SUBTYPE],
    ) {
        return Err(StatusCode::BadTypeMismatch);
    }

    // Step 5: synthesize a null value if none is set and the data type is
    // concrete.
    {
        let attrs = value_attrs_mut(node).expect("checked node_class above");
        let current_value = attrs.value.read(0.0).unwrap_or(Variant::Empty);
        if matches!(current_value, Variant::Empty) && attrs.data_type != ids::data_type::BASE_DATA_TYPE {
            let synthesized = if attrs.value_rank == 1 {
                Variant::Array {
                    values: Vec::new(),
                    dimensions: vec![0],
                }
            } else {
                default_scalar(&attrs.data_type)
                    .map(Variant::Scalar)
                    .unwrap_or(Variant::Empty)
            };
            debug!("type_check: synthesizing null value for {node_id}");
            attrs.value.set_inline(synthesized);
        }
    }

    let attrs = value_attrs_mut(node).expect("checked node_class above");
    let value = attrs.value.read(0.0).unwrap_or(Variant::Empty);

    // Step 6: adopt the VT's valueRank / synthesize array dims of length 1
    // when the node didn't declare its own.
    if attrs.array_dimensions.is_empty() {
        if value.is_scalar() && attrs.value_rank == 0 {
            attrs.value_rank = vt_value_rank;
        } else if value.is_array() && attrs.value_rank == 1 {
            attrs.array_dimensions = vec![1];
        }
    }

    // Step 7: valueRank must be compatible with the declared dims' length.
    if !value_rank::compatible_array_dimensions(attrs.value_rank, &attrs.array_dimensions) {
        return Err(StatusCode::BadTypeMismatch);
    }

    // Step 8: valueRank must be compatible with the VT's valueRank.
    if !value_rank::compatible_value_ranks(attrs.value_rank, vt_value_rank) {
        return Err(StatusCode::BadTypeMismatch);
    }

    // Step 9: arrayDimensions must be pointwise compatible with the VT's.
    if !value_rank::compatible_array_dimension_values(&attrs.array_dimensions, &vt_array_dimensions)
    {
        return Err(StatusCode::BadTypeMismatch);
    }

    // Step 10: for inline-data variables, coerce the value if needed.
    if is_variable {
        if let Err(status) = type_check_value(attrs) {
            warn!("type_check: value coercion failed on {node_id}: {status}");
            return Err(status);
        }
    }

    Ok(())
}

fn value_attrs_mut(node: &mut NodeType) -> Option<&mut ValueAttributes> {
    match node {
        NodeType::Variable(v) => Some(&mut v.value_attrs),
        NodeType::VariableType(v) => Some(&mut v.value_attrs),
        _ => None,
    }
}

/// A zero-initialized scalar for one of the built-in data types this crate
/// models (§4.F step 5). Unrecognized data types are left empty rather
/// than guessed at.
fn default_scalar(data_type: &NodeId) -> Option<ScalarValue> {
    if *data_type == ids::data_type::BOOLEAN {
        Some(ScalarValue::Boolean(false))
    } else if *data_type == ids::data_type::BYTE {
        Some(ScalarValue::Byte(0))
    } else if *data_type == ids::data_type::INT32 {
        Some(ScalarValue::Int32(0))
    } else if *data_type == ids::data_type::UINT32 {
        Some(ScalarValue::UInt32(0))
    } else if *data_type == ids::data_type::DOUBLE {
        Some(ScalarValue::Double(0.0))
    } else if *data_type == ids::data_type::STRING {
        Some(ScalarValue::String("".into()))
    } else {
        None
    }
}

/// Coerces `attrs.value` to a representation compatible with
/// `attrs.data_type`/`value_rank`. The types this crate models already
/// come out of `ScalarValue`/`Variant` construction in the right shape, so
/// this only rejects a declared array that holds a scalar or vice versa;
/// a richer coercion (e.g. widening integers) belongs to the wire-codec
/// layer this core doesn't implement (§1).
fn type_check_value(attrs: &mut ValueAttributes) -> Result<(), StatusCode> {
    let value = attrs.value.read(0.0).unwrap_or(Variant::Empty);
    match (&value, attrs.value_rank) {
        (Variant::Empty, _) => Ok(()),
        (Variant::Scalar(_), rank) if rank == value_rank::SCALAR || rank == 0 => Ok(()),
        (Variant::Array { .. }, rank) if rank != value_rank::SCALAR => Ok(()),
        _ => Err(StatusCode::BadTypeMismatch),
    }
}
