// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Core identifier and value types shared by the address-space crate.
//!
//! This crate deliberately covers only the types the address-space core
//! (`opcua-addrspace`) touches directly: node identity, names, status
//! codes, attribute bitmasks and the value representation. Everything else
//! a full stack needs — binary/XML encoding, the generated well-known-id
//! tables, secure channel types — belongs to other crates and is out of
//! scope here.

mod access_level;
mod byte_string;
mod expanded_node_id;
pub mod ids;
mod localized_text;
mod node_class;
mod node_id;
mod qualified_name;
mod status_code;
mod string;
pub mod value_rank;
mod variant;
mod write_mask;

pub use access_level::AccessLevel;
pub use byte_string::ByteString;
pub use expanded_node_id::ExpandedNodeId;
pub use localized_text::LocalizedText;
pub use node_class::NodeClass;
pub use node_id::{Identifier, NodeId};
pub use qualified_name::QualifiedName;
pub use status_code::StatusCode;
pub use string::UAString;
pub use variant::{ScalarValue, Variant};
pub use write_mask::WriteMask;

mod guid;
pub use guid::Guid;
