// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `NodeClass`.

/// The class of a node in the address space. Every node is tagged with
/// exactly one of these for its lifetime; it is never reassigned.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
#[repr(i32)]
pub enum NodeClass {
    /// A structural node without special meaning of its own.
    Object = 1,
    /// A variable, carrying a current value.
    Variable = 2,
    /// A method that can be invoked.
    Method = 4,
    /// The type of an object.
    ObjectType = 8,
    /// The type of a variable.
    VariableType = 16,
    /// The type of a reference.
    ReferenceType = 32,
    /// The type of a variable's value.
    DataType = 64,
    /// A predefined subset of the address space.
    View = 128,
}

impl NodeClass {
    /// Returns true for the four node classes that form the type system
    /// (`DataType`, `VariableType`, `ObjectType`, `ReferenceType`); these are
    /// the classes the parent-reference validator (§4.E) treats specially.
    pub fn is_type_class(self) -> bool {
        matches!(
            self,
            NodeClass::DataType
                | NodeClass::VariableType
                | NodeClass::ObjectType
                | NodeClass::ReferenceType
        )
    }
}
