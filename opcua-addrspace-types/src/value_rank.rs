// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! `ValueRank` constants and the compatibility checks the type checker
//! (§4.F step 9, `compatibleValueRankArrayDimensions`) runs between a
//! Variable/VariableType node and its type definition.

/// The value is always an array of two or more dimensions, but the number
/// of dimensions is unknown at the type level.
pub const ONE_OR_MORE_DIMENSIONS: i32 = 0;
/// The value is always a scalar.
pub const SCALAR: i32 = -1;
/// The value can be a scalar or an array of any rank.
pub const ANY: i32 = -2;
/// The value can be a scalar or a one-dimensional array.
pub const SCALAR_OR_ONE_DIMENSION: i32 = -3;

/// True if `value_rank` is permitted to be used where a supertype/type
/// definition declares `type_value_rank`, per Part 3 table 8. Mirrors
/// open62541's `compatibleValueRanks`.
pub fn compatible_value_ranks(value_rank: i32, type_value_rank: i32) -> bool {
    if type_value_rank == ANY {
        return true;
    }
    if type_value_rank == SCALAR_OR_ONE_DIMENSION {
        return value_rank == SCALAR || value_rank == 1;
    }
    value_rank == type_value_rank
}

/// True if `dimensions` is a valid `ArrayDimensions` for the given
/// `value_rank`: its length must equal the rank when the rank names a
/// specific number of dimensions, and it must be empty for a scalar or an
/// unconstrained rank.
pub fn compatible_array_dimensions(value_rank: i32, dimensions: &[u32]) -> bool {
    match value_rank {
        SCALAR => dimensions.is_empty(),
        ANY | SCALAR_OR_ONE_DIMENSION => true,
        ONE_OR_MORE_DIMENSIONS => !dimensions.is_empty(),
        rank if rank > 0 => dimensions.len() as i32 == rank,
        _ => false,
    }
}

/// True if a node's `ArrayDimensions` is compatible with its type
/// definition's: when both declare a dimension, the sizes must match; a
/// `0` on the type's side means that dimension is unconstrained. A node
/// with no declared dimensions is always compatible (§4.F step 9).
pub fn compatible_array_dimension_values(dims: &[u32], type_dims: &[u32]) -> bool {
    if dims.is_empty() || type_dims.is_empty() {
        return true;
    }
    if dims.len() != type_dims.len() {
        return false;
    }
    dims.iter()
        .zip(type_dims.iter())
        .all(|(d, t)| *t == 0 || d == t)
}
