// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Well-known, namespace-zero node ids.
//!
//! The full `NodeIds` table generated from the standard nodeset is tens of
//! thousands of entries and belongs to codegen tooling (out of scope here,
//! §1); this module carries only the identifiers the address-space core's
//! own algorithms reason about by name: the reference-type hierarchy roots
//! used by the type hierarchy walker (§4.D) and parent-reference validator
//! (§4.E), the built-in scalar data types used by the type checker (§4.F),
//! and the default type definitions used by the AddNode orchestrator (§4.H).

use crate::node_id::NodeId;

/// Namespace-zero reference type ids.
pub mod reference_type {
    use super::NodeId;

    /// The root of the entire reference-type hierarchy.
    pub const REFERENCES: NodeId = NodeId::ns0(31);
    /// Root of the non-hierarchical reference types.
    pub const NON_HIERARCHICAL_REFERENCES: NodeId = NodeId::ns0(32);
    /// Root of the hierarchical reference types; the parent-reference
    /// validator requires instance parent references to be in this subtree.
    pub const HIERARCHICAL_REFERENCES: NodeId = NodeId::ns0(33);
    /// Root of the "child" reference types (Aggregates, HasSubtype).
    pub const HAS_CHILD: NodeId = NodeId::ns0(34);
    /// Used to relate a view or folder to its non-owned members.
    pub const ORGANIZES: NodeId = NodeId::ns0(35);
    /// Relates an object or view to the node that raises its events.
    pub const HAS_EVENT_SOURCE: NodeId = NodeId::ns0(36);
    /// Relates an instance to its type definition.
    pub const HAS_TYPE_DEFINITION: NodeId = NodeId::ns0(40);
    /// Root of the containment reference types (HasComponent, HasProperty).
    pub const AGGREGATES: NodeId = NodeId::ns0(44);
    /// Relates a type to its supertype; the only reference type allowed
    /// between two type nodes (§4.E rule 4).
    pub const HAS_SUBTYPE: NodeId = NodeId::ns0(45);
    /// Relates an owning node to a property (non-instantiable) child.
    pub const HAS_PROPERTY: NodeId = NodeId::ns0(46);
    /// Relates an owning node to an aggregated (instantiable) component child.
    pub const HAS_COMPONENT: NodeId = NodeId::ns0(47);
}

/// Namespace-zero built-in data type ids.
pub mod data_type {
    use super::NodeId;

    /// The root of the data type hierarchy; every concrete data type is a
    /// (possibly indirect) `HasSubtype` descendant of this.
    pub const BASE_DATA_TYPE: NodeId = NodeId::ns0(24);
    /// `Boolean`.
    pub const BOOLEAN: NodeId = NodeId::ns0(1);
    /// `Byte` (unsigned 8-bit).
    pub const BYTE: NodeId = NodeId::ns0(3);
    /// `Int32`.
    pub const INT32: NodeId = NodeId::ns0(6);
    /// `UInt32`.
    pub const UINT32: NodeId = NodeId::ns0(7);
    /// `Double`.
    pub const DOUBLE: NodeId = NodeId::ns0(11);
    /// `String`.
    pub const STRING: NodeId = NodeId::ns0(12);
}

/// Namespace-zero built-in object type ids.
pub mod object_type {
    use super::NodeId;

    /// The root of the object type hierarchy; the default type definition
    /// used by the AddNode orchestrator when an Object is added without one
    /// (§4.H step 2).
    pub const BASE_OBJECT_TYPE: NodeId = NodeId::ns0(58);
    /// A simple container type used to organize other nodes.
    pub const FOLDER_TYPE: NodeId = NodeId::ns0(61);
}

/// Namespace-zero built-in variable type ids.
pub mod variable_type {
    use super::NodeId;

    /// The root of the variable type hierarchy.
    pub const BASE_VARIABLE_TYPE: NodeId = NodeId::ns0(62);
    /// The default type definition used by the AddNode orchestrator when a
    /// Variable is added without one (§4.H step 2), and the node exempted
    /// from the type checker entirely as the bootstrap of the standard
    /// namespace (§4.F step 2).
    pub const BASE_DATA_VARIABLE_TYPE: NodeId = NodeId::ns0(63);
    /// The type definition used for the synthesized `InputArguments` /
    /// `OutputArguments` children of a Method node (§6).
    pub const PROPERTY_TYPE: NodeId = NodeId::ns0(68);
}
