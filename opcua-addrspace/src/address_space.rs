// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains `AddressSpace` (§5): owns the `NodeStore` plus the crate's
//! configuration and is the single entry point every mutation goes through.

use std::sync::Arc;

use opcua_addrspace_types::{ExpandedNodeId, NodeId, StatusCode};

use crate::add_node;
use crate::delete_node;
use crate::node::NodeType;
use crate::node_store::NodeStore;
use crate::reference_service;

/// Fired once a node finishes instantiation (§4.G step 6), as
/// `(new_node_id, type_id)`. Where the C API threads an opaque `handle`
/// pointer through to this call, a caller that needs context here should
/// capture it in the closure instead.
pub type InstantiationCallback = Arc<dyn Fn(&NodeId, &NodeId) + Send + Sync>;

/// Owns every node in one address space and centralizes mutation (§5): a
/// caller wanting concurrent access wraps this in a single `RwLock` (as
/// `opcua-server`'s in-memory node manager does around its own address
/// space) so writers serialize through `&mut AddressSpace` while readers
/// take the shared lock straight through to `store()`.
pub struct AddressSpace {
    store: NodeStore,
    namespace_count: u16,
}

impl AddressSpace {
    /// `namespace_count` bounds the namespace indices [`Self::add_node`]
    /// accepts; it must be at least 1, since namespace 0 (the standard
    /// namespace) always exists.
    pub fn new(namespace_count: u16) -> Self {
        Self {
            store: NodeStore::new(),
            namespace_count: namespace_count.max(1),
        }
    }

    pub fn namespace_count(&self) -> u16 {
        self.namespace_count
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut NodeStore {
        &mut self.store
    }

    /// Add a bidirectional reference between two existing nodes (§4.C).
    pub fn add_reference(
        &mut self,
        source: &NodeId,
        reference_type_id: &NodeId,
        target: &ExpandedNodeId,
        is_forward: bool,
    ) -> Result<(), StatusCode> {
        reference_service::add_reference(
            &mut self.store,
            source,
            reference_type_id,
            target,
            is_forward,
        )
    }

    /// Remove a reference, optionally from both sides (§4.C).
    pub fn delete_reference(
        &mut self,
        source: &NodeId,
        reference_type_id: &NodeId,
        target: &ExpandedNodeId,
        is_forward: bool,
        delete_bidirectional: bool,
    ) -> StatusCode {
        reference_service::delete_reference(
            &mut self.store,
            source,
            reference_type_id,
            target,
            is_forward,
            delete_bidirectional,
        )
    }

    /// Insert, validate and instantiate a new node in one call (§4.H).
    /// `parent_id`/`reference_type_id` may both be null only for a
    /// parentless Object (§4.E).
    pub fn add_node(
        &mut self,
        node: NodeType,
        parent_id: Option<&NodeId>,
        reference_type_id: Option<&NodeId>,
        type_definition: Option<&NodeId>,
        callback: Option<&InstantiationCallback>,
    ) -> Result<NodeId, StatusCode> {
        add_node::add_node(
            self,
            node,
            parent_id,
            reference_type_id,
            type_definition,
            callback,
        )
    }

    /// Remove a node and, optionally, every reference touching it (§4.I).
    pub fn delete_node(&mut self, id: &NodeId, delete_references: bool) -> Result<(), StatusCode> {
        delete_node::delete_node(self, id, delete_references)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use opcua_addrspace_types::{ids, StatusCode, Variant};

    use super::*;
    use crate::data_type::DataType;
    use crate::lifecycle::Lifecycle;
    use crate::object::Object;
    use crate::object_type::ObjectType;
    use crate::reference_type::ReferenceType;
    use crate::value::ValueSource;
    use crate::variable::Variable;
    use crate::variable_type::VariableType;

    const NS: u16 = 1;

    /// Insert just enough of the standard nodeset as real nodes for the
    /// type-hierarchy walks in D/E/F to have something to walk — the
    /// reference-type hierarchy roots, a handful of scalar data types, and
    /// the default object/variable types the AddNode orchestrator falls
    /// back to (§4.H step 2). Modeled on `make_sample_address_space()` in
    /// `async-opcua-server`'s own address-space tests.
    fn bootstrap_namespace_zero(space: &mut AddressSpace) {
        let reference_types = [
            (ids::reference_type::REFERENCES, true),
            (ids::reference_type::NON_HIERARCHICAL_REFERENCES, true),
            (ids::reference_type::HIERARCHICAL_REFERENCES, true),
            (ids::reference_type::HAS_CHILD, true),
            (ids::reference_type::ORGANIZES, false),
            (ids::reference_type::HAS_EVENT_SOURCE, false),
            (ids::reference_type::HAS_TYPE_DEFINITION, false),
            (ids::reference_type::AGGREGATES, true),
            (ids::reference_type::HAS_SUBTYPE, false),
            (ids::reference_type::HAS_PROPERTY, false),
            (ids::reference_type::HAS_COMPONENT, false),
        ];
        for (id, is_abstract) in reference_types {
            let mut rt = ReferenceType::new(&id, "RT", "RT", false, None);
            rt.is_abstract = is_abstract;
            space.store_mut().insert(rt.into()).unwrap();
        }
        let subtype_links = [
            (
                ids::reference_type::HIERARCHICAL_REFERENCES,
                ids::reference_type::REFERENCES,
            ),
            (
                ids::reference_type::NON_HIERARCHICAL_REFERENCES,
                ids::reference_type::REFERENCES,
            ),
            (
                ids::reference_type::HAS_CHILD,
                ids::reference_type::HIERARCHICAL_REFERENCES,
            ),
            (
                ids::reference_type::ORGANIZES,
                ids::reference_type::HIERARCHICAL_REFERENCES,
            ),
            (
                ids::reference_type::HAS_EVENT_SOURCE,
                ids::reference_type::HIERARCHICAL_REFERENCES,
            ),
            (
                ids::reference_type::HAS_TYPE_DEFINITION,
                ids::reference_type::NON_HIERARCHICAL_REFERENCES,
            ),
            (ids::reference_type::AGGREGATES, ids::reference_type::HAS_CHILD),
            (ids::reference_type::HAS_SUBTYPE, ids::reference_type::HAS_CHILD),
            (ids::reference_type::HAS_PROPERTY, ids::reference_type::AGGREGATES),
            (ids::reference_type::HAS_COMPONENT, ids::reference_type::AGGREGATES),
        ];
        for (child, parent) in subtype_links {
            link_subtype(space, &child, &parent);
        }

        let data_types = [
            ids::data_type::BOOLEAN,
            ids::data_type::BYTE,
            ids::data_type::INT32,
            ids::data_type::UINT32,
            ids::data_type::DOUBLE,
            ids::data_type::STRING,
        ];
        space
            .store_mut()
            .insert(DataType::new(&ids::data_type::BASE_DATA_TYPE, "BaseDataType", "BaseDataType").into())
            .unwrap();
        for id in data_types {
            space.store_mut().insert(DataType::new(&id, "DT", "DT").into()).unwrap();
            link_subtype(space, &id, &ids::data_type::BASE_DATA_TYPE);
        }

        // BaseObjectType is the default typeDefinition for a plain Object
        // add (§4.H step 2) and must therefore be concrete for that default
        // to succeed (§8 scenario 1).
        space
            .store_mut()
            .insert(ObjectType::new(&ids::object_type::BASE_OBJECT_TYPE, "BaseObjectType", "BaseObjectType").into())
            .unwrap();

        let mut base_variable_type = VariableType::new(
            &ids::variable_type::BASE_VARIABLE_TYPE,
            "BaseVariableType",
            "BaseVariableType",
        );
        base_variable_type.is_abstract = true;
        space.store_mut().insert(base_variable_type.into()).unwrap();

        let mut base_data_variable_type = VariableType::new(
            &ids::variable_type::BASE_DATA_VARIABLE_TYPE,
            "BaseDataVariableType",
            "BaseDataVariableType",
        );
        base_data_variable_type.value_attrs.data_type = ids::data_type::BASE_DATA_TYPE;
        base_data_variable_type.value_attrs.value_rank = opcua_addrspace_types::value_rank::ANY;
        space.store_mut().insert(base_data_variable_type.into()).unwrap();
        link_subtype(
            space,
            &ids::variable_type::BASE_DATA_VARIABLE_TYPE,
            &ids::variable_type::BASE_VARIABLE_TYPE,
        );

        let mut property_type =
            VariableType::new(&ids::variable_type::PROPERTY_TYPE, "PropertyType", "PropertyType");
        property_type.value_attrs.data_type = ids::data_type::BASE_DATA_TYPE;
        property_type.value_attrs.value_rank = opcua_addrspace_types::value_rank::ANY;
        space.store_mut().insert(property_type.into()).unwrap();
        link_subtype(
            space,
            &ids::variable_type::PROPERTY_TYPE,
            &ids::variable_type::BASE_DATA_VARIABLE_TYPE,
        );
    }

    /// Wires a `HasSubtype` edge exactly the way `add_node_finish` step 5
    /// would for a type-class node: an inverse edge from `child` to
    /// `parent`, with the reference service adding the matching forward
    /// half on `parent`.
    fn link_subtype(space: &mut AddressSpace, child: &NodeId, parent: &NodeId) {
        space
            .add_reference(
                child,
                &ids::reference_type::HAS_SUBTYPE,
                &ExpandedNodeId::from(parent.clone()),
                false,
            )
            .unwrap();
    }

    fn new_space() -> AddressSpace {
        let mut space = AddressSpace::new(2);
        bootstrap_namespace_zero(&mut space);
        space
    }

    fn ns_id(n: u32) -> NodeId {
        NodeId::new(NS, n)
    }

    #[test]
    fn orphan_object_defaults_to_base_object_type() {
        let mut space = new_space();
        let node = Object::new(&ns_id(0), "Orphan", "Orphan");
        let id = space.add_node(node.into(), None, None, None, None).unwrap();

        assert!(space.store().contains(&id));
        let has_type_def = space
            .store()
            .get(&id)
            .unwrap()
            .references()
            .iter()
            .find(|e| e.is_forward() && e.reference_type_id == ids::reference_type::HAS_TYPE_DEFINITION);
        assert!(has_type_def.is_some());
        assert_eq!(
            has_type_def.unwrap().target,
            ExpandedNodeId::from(ids::object_type::BASE_OBJECT_TYPE)
        );
    }

    #[test]
    fn object_type_parent_must_use_has_subtype() {
        let mut space = new_space();
        let before = space.store().len();
        let node = ObjectType::new(&ns_id(0), "FooType", "FooType");
        let result = space.add_node(
            node.into(),
            Some(&ids::object_type::BASE_OBJECT_TYPE),
            Some(&ids::reference_type::ORGANIZES),
            None,
            None,
        );
        assert_eq!(result, Err(StatusCode::BadReferenceNotAllowed));
        // The failed add must not have left a half-inserted node behind.
        assert_eq!(space.store().len(), before);
    }

    #[test]
    fn abstract_variable_type_rejected() {
        let mut space = new_space();
        let mut abstract_vt = VariableType::new(&ns_id(0), "AbstractVT", "AbstractVT");
        abstract_vt.is_abstract = true;
        abstract_vt.value_attrs.data_type = ids::data_type::BASE_DATA_TYPE;
        abstract_vt.value_attrs.value_rank = opcua_addrspace_types::value_rank::ANY;
        let vt_id = space
            .add_node(
                abstract_vt.into(),
                Some(&ids::variable_type::BASE_DATA_VARIABLE_TYPE),
                Some(&ids::reference_type::HAS_SUBTYPE),
                None,
                None,
            )
            .unwrap();

        let var = Variable::new(&ns_id(0), "V", "V");
        let result = space.add_node(var.into(), None, None, Some(&vt_id), None);
        assert_eq!(result, Err(StatusCode::BadTypeDefinitionInvalid));
    }

    /// Defines an ObjectType `T` with one aggregated Variable child "X"
    /// (value 42), instantiates an Object of type `T`, and checks the new
    /// object has a child "X" with value 42 plus a HasTypeDefinition edge
    /// to `T` (§8 scenario 4).
    fn define_object_type_with_child_x(space: &mut AddressSpace) -> (NodeId, NodeId) {
        let object_type = ObjectType::new(&ns_id(0), "T", "T");
        let type_id = space
            .add_node(
                object_type.into(),
                Some(&ids::object_type::BASE_OBJECT_TYPE),
                Some(&ids::reference_type::HAS_SUBTYPE),
                None,
                None,
            )
            .unwrap();

        let mut x = Variable::new(&ns_id(0), "X", "X");
        x.value_attrs.data_type = ids::data_type::INT32;
        x.value_attrs.value_rank = opcua_addrspace_types::value_rank::SCALAR;
        x.value_attrs.value = ValueSource::Data {
            value: Variant::from(42i32),
            on_change: None,
        };
        let x_id = space
            .add_node(
                x.into(),
                Some(&type_id),
                Some(&ids::reference_type::HAS_COMPONENT),
                Some(&ids::variable_type::BASE_DATA_VARIABLE_TYPE),
                None,
            )
            .unwrap();
        (type_id, x_id)
    }

    fn find_child(space: &AddressSpace, owner: &NodeId, name: &str) -> Option<NodeId> {
        space
            .store()
            .get(owner)?
            .references()
            .iter()
            .filter(|e| e.is_forward())
            .find_map(|e| {
                let child_id = e.target.as_node_id()?;
                let child = space.store().get(child_id)?;
                (child.base().browse_name().name.as_str() == name).then(|| child_id.clone())
            })
    }

    #[test]
    fn instantiation_copies_type_members() {
        let mut space = new_space();
        let (type_id, _x_type_id) = define_object_type_with_child_x(&mut space);

        let object = Object::new(&ns_id(0), "Instance", "Instance");
        let object_id = space.add_node(object.into(), None, None, Some(&type_id), None).unwrap();

        let has_type_def = space
            .store()
            .get(&object_id)
            .unwrap()
            .references()
            .iter()
            .any(|e| e.is_forward() && e.reference_type_id == ids::reference_type::HAS_TYPE_DEFINITION
                && e.target == ExpandedNodeId::from(type_id.clone()));
        assert!(has_type_def);

        let x_id = find_child(&space, &object_id, "X").expect("X was copied onto the instance");
        let x_node = space.store().get(&x_id).unwrap().as_variable().unwrap();
        assert_eq!(x_node.value_attrs.value.read(0.0).unwrap(), Variant::from(42i32));
    }

    #[test]
    fn merge_with_existing_child_is_not_overwritten() {
        let mut space = new_space();
        let (type_id, _x_type_id) = define_object_type_with_child_x(&mut space);

        let object = Object::new(&ns_id(0), "Instance", "Instance");
        let object_id = space.add_node(object.into(), None, None, None, None).unwrap();

        // Pre-create a same-browseName child "X" with a different value
        // before instantiating T onto this object.
        let mut pre_existing_x = Variable::new(&ns_id(0), "X", "X");
        pre_existing_x.value_attrs.data_type = ids::data_type::INT32;
        pre_existing_x.value_attrs.value_rank = opcua_addrspace_types::value_rank::SCALAR;
        pre_existing_x.value_attrs.value = ValueSource::Data {
            value: Variant::from(7i32),
            on_change: None,
        };
        let existing_x_id = space
            .add_node(
                pre_existing_x.into(),
                Some(&object_id),
                Some(&ids::reference_type::HAS_COMPONENT),
                Some(&ids::variable_type::BASE_DATA_VARIABLE_TYPE),
                None,
            )
            .unwrap();

        crate::instantiate::copy_children(&mut space, &type_id, &object_id).unwrap();

        let x_id = find_child(&space, &object_id, "X").unwrap();
        assert_eq!(x_id, existing_x_id, "the pre-existing child must be reused, not replaced");
        let x_node = space.store().get(&x_id).unwrap().as_variable().unwrap();
        assert_eq!(x_node.value_attrs.value.read(0.0).unwrap(), Variant::from(7i32));
    }

    #[test]
    fn add_reference_rolls_back_source_edge_on_target_failure() {
        let mut space = new_space();
        let source = Object::new(&ns_id(0), "Source", "Source");
        let source_id = space.add_node(source.into(), None, None, None, None).unwrap();

        let missing_target = ExpandedNodeId::from(ns_id(999));
        let result = space.add_reference(&source_id, &ids::reference_type::ORGANIZES, &missing_target, true);

        assert_eq!(result, Err(StatusCode::BadNodeIdUnknown));
        assert!(space
            .store()
            .get(&source_id)
            .unwrap()
            .references()
            .iter()
            .all(|e| e.target != missing_target));
    }

    #[test]
    fn delete_node_removes_peer_edges_symmetrically() {
        let mut space = new_space();
        let a = Object::new(&ns_id(0), "A", "A");
        let a_id = space.add_node(a.into(), None, None, None, None).unwrap();
        let b = Object::new(&ns_id(0), "B", "B");
        let b_id = space.add_node(b.into(), None, None, None, None).unwrap();

        space
            .add_reference(&a_id, &ids::reference_type::ORGANIZES, &ExpandedNodeId::from(b_id.clone()), true)
            .unwrap();
        assert!(space.store().get(&b_id).unwrap().references().iter().any(|e| e.target == ExpandedNodeId::from(a_id.clone())));

        space.delete_node(&a_id, true).unwrap();

        assert!(!space.store().contains(&a_id));
        assert!(space
            .store()
            .get(&b_id)
            .unwrap()
            .references()
            .iter()
            .all(|e| e.target != ExpandedNodeId::from(a_id.clone())));
    }

    #[test]
    fn variable_data_type_must_be_subtype_of_variable_types_data_type() {
        let mut space = new_space();
        let mut vt = VariableType::new(&ns_id(0), "IntOnlyVT", "IntOnlyVT");
        vt.value_attrs.data_type = ids::data_type::INT32;
        let vt_id = space
            .add_node(
                vt.into(),
                Some(&ids::variable_type::BASE_DATA_VARIABLE_TYPE),
                Some(&ids::reference_type::HAS_SUBTYPE),
                None,
                None,
            )
            .unwrap();

        let mut wrong_typed = Variable::new(&ns_id(0), "V", "V");
        wrong_typed.value_attrs.data_type = ids::data_type::STRING;
        let result = space.add_node(wrong_typed.into(), None, None, Some(&vt_id), None);
        assert_eq!(result, Err(StatusCode::BadTypeMismatch));
    }

    #[test]
    fn object_constructor_and_destructor_run_exactly_once() {
        let mut space = new_space();
        let constructed = Arc::new(AtomicU64::new(0));
        let destructed = Arc::new(AtomicU64::new(0));
        let constructed_clone = constructed.clone();
        let destructed_clone = destructed.clone();

        let mut object_type = ObjectType::new(&ns_id(0), "Lifecycled", "Lifecycled");
        object_type.lifecycle = Lifecycle {
            constructor: Some(Arc::new(move |_id| {
                constructed_clone.fetch_add(1, Ordering::SeqCst);
                Ok(42)
            })),
            destructor: Some(Arc::new(move |_id, _handle| {
                destructed_clone.fetch_add(1, Ordering::SeqCst);
            })),
        };
        let type_id = space
            .add_node(
                object_type.into(),
                Some(&ids::object_type::BASE_OBJECT_TYPE),
                Some(&ids::reference_type::HAS_SUBTYPE),
                None,
                None,
            )
            .unwrap();

        let instance = Object::new(&ns_id(0), "Instance", "Instance");
        let instance_id = space
            .add_node(instance.into(), None, None, Some(&type_id), None)
            .unwrap();
        assert_eq!(constructed.load(Ordering::SeqCst), 1);
        let handle = space.store().get(&instance_id).unwrap().as_object().unwrap().instance_handle;
        assert_eq!(handle, Some(42));

        // The destructor walk matches inverse HasSubtype edges on the
        // instance itself, not its HasTypeDefinition target (§4.I, preserved
        // as observed) — wire that edge directly the way a node manager
        // that relies on this quirk would.
        space
            .add_reference(
                &instance_id,
                &ids::reference_type::HAS_SUBTYPE,
                &ExpandedNodeId::from(type_id.clone()),
                false,
            )
            .unwrap();

        space.delete_node(&instance_id, true).unwrap();
        assert_eq!(destructed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn add_node_round_trips_with_delete_node() {
        let mut space = new_space();
        let before = space.store().len();

        let object = Object::new(&ns_id(0), "Transient", "Transient");
        let id = space.add_node(object.into(), None, None, None, None).unwrap();
        assert_eq!(space.store().len(), before + 1);

        space.delete_node(&id, true).unwrap();
        assert_eq!(space.store().len(), before);
    }

    #[test]
    fn instantiation_callback_fires_with_new_node_and_type() {
        let mut space = new_space();
        let seen: Arc<std::sync::Mutex<Option<(NodeId, NodeId)>>> = Arc::new(std::sync::Mutex::new(None));
        let seen_clone = seen.clone();
        let callback: InstantiationCallback = Arc::new(move |new_id, type_id| {
            *seen_clone.lock().unwrap() = Some((new_id.clone(), type_id.clone()));
        });

        let object = Object::new(&ns_id(0), "Instance", "Instance");
        let object_id = space
            .add_node(object.into(), None, None, None, Some(&callback))
            .unwrap();

        let (seen_id, seen_type) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen_id, object_id);
        assert_eq!(seen_type, ids::object_type::BASE_OBJECT_TYPE);
    }
}
