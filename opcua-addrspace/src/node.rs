// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains `NodeType`, the tagged union over the eight node classes (§3).

use opcua_addrspace_types::NodeClass;

use crate::base::{Base, NodeBase};
use crate::data_type::DataType;
use crate::method::Method;
use crate::object::Object;
use crate::object_type::ObjectType;
use crate::reference::ReferenceEdge;
use crate::reference_type::ReferenceType;
use crate::variable::Variable;
use crate::variable_type::VariableType;
use crate::view::View;

/// A node in the address space, tagged by its class.
#[derive(Debug, Clone)]
pub enum NodeType {
    Object(Box<Object>),
    Variable(Box<Variable>),
    Method(Box<Method>),
    ObjectType(Box<ObjectType>),
    VariableType(Box<VariableType>),
    ReferenceType(Box<ReferenceType>),
    DataType(Box<DataType>),
    View(Box<View>),
}

macro_rules! dispatch {
    ($self:expr, $pattern:ident => $body:expr) => {
        match $self {
            NodeType::Object($pattern) => $body,
            NodeType::Variable($pattern) => $body,
            NodeType::Method($pattern) => $body,
            NodeType::ObjectType($pattern) => $body,
            NodeType::VariableType($pattern) => $body,
            NodeType::ReferenceType($pattern) => $body,
            NodeType::DataType($pattern) => $body,
            NodeType::View($pattern) => $body,
        }
    };
}

impl NodeType {
    pub fn node_class(&self) -> NodeClass {
        dispatch!(self, n => n.node_class())
    }

    /// Borrow the common header embedded in whichever variant this is.
    pub fn base(&self) -> &Base {
        dispatch!(self, n => &n.base)
    }

    pub fn base_mut(&mut self) -> &mut Base {
        dispatch!(self, n => &mut n.base)
    }

    pub fn references(&self) -> &[ReferenceEdge] {
        self.base().references()
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            NodeType::Object(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            NodeType::Object(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_object_type(&self) -> Option<&ObjectType> {
        match self {
            NodeType::ObjectType(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            NodeType::Variable(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_variable_mut(&mut self) -> Option<&mut Variable> {
        match self {
            NodeType::Variable(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_variable_type(&self) -> Option<&VariableType> {
        match self {
            NodeType::VariableType(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_reference_type(&self) -> Option<&ReferenceType> {
        match self {
            NodeType::ReferenceType(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            NodeType::Method(n) => Some(n),
            _ => None,
        }
    }
}

impl From<Object> for NodeType {
    fn from(n: Object) -> Self {
        NodeType::Object(Box::new(n))
    }
}

impl From<Variable> for NodeType {
    fn from(n: Variable) -> Self {
        NodeType::Variable(Box::new(n))
    }
}

impl From<Method> for NodeType {
    fn from(n: Method) -> Self {
        NodeType::Method(Box::new(n))
    }
}

impl From<ObjectType> for NodeType {
    fn from(n: ObjectType) -> Self {
        NodeType::ObjectType(Box::new(n))
    }
}

impl From<VariableType> for NodeType {
    fn from(n: VariableType) -> Self {
        NodeType::VariableType(Box::new(n))
    }
}

impl From<ReferenceType> for NodeType {
    fn from(n: ReferenceType) -> Self {
        NodeType::ReferenceType(Box::new(n))
    }
}

impl From<DataType> for NodeType {
    fn from(n: DataType) -> Self {
        NodeType::DataType(Box::new(n))
    }
}

impl From<View> for NodeType {
    fn from(n: View) -> Self {
        NodeType::View(Box::new(n))
    }
}
