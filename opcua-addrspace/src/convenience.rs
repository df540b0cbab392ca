// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Node-shape helpers that cannot be expressed as a plain `add_node` call
//! (§6): a Variable whose value comes from a live data source, and a Method
//! whose argument lists are modeled as child Property variables.

use opcua_addrspace_types::{ids, LocalizedText, NodeId, QualifiedName, StatusCode};

use crate::address_space::AddressSpace;
use crate::method::{Method, MethodCallback};
use crate::value::{DataSourcePair, ValueSource};
use crate::variable::Variable;

impl AddressSpace {
    /// Add a Variable whose value is produced by `data_source` rather than
    /// stored inline. The source is read once up front — before the node
    /// ever reaches the store — so a broken data source is rejected here
    /// rather than surfacing later as a type-check failure on a value the
    /// type checker had to synthesize itself.
    pub fn add_data_source_variable_node(
        &mut self,
        requested_node_id: &NodeId,
        parent_id: &NodeId,
        reference_type_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
        type_definition: &NodeId,
        data_source: DataSourcePair,
    ) -> Result<NodeId, StatusCode> {
        (data_source.read)(data_source.handle)?;

        let mut node = Variable::new(requested_node_id, browse_name, display_name);
        node.value_attrs.value = ValueSource::DataSource(data_source);

        self.add_node(
            node.into(),
            Some(parent_id),
            Some(reference_type_id),
            Some(type_definition),
            None,
        )
    }

    /// Add a Method node, then an `InputArguments`/`OutputArguments`
    /// Property child for each non-empty argument list. Both children are
    /// typed `BaseDataType`/`valueRank = 1`; the wire-level `Argument`
    /// structure describing each parameter's own name/type is a codec
    /// concern this crate doesn't model (§1), so the properties carry no
    /// element values, only the shape a collaborator would fill in.
    ///
    /// Unlike the source this is grounded on, a failure adding either
    /// property child is propagated rather than silently discarded (§9
    /// open question "unchecked child adds" — resolved in favor of
    /// propagating, matching the source's own suggested fix).
    pub fn add_method_node(
        &mut self,
        requested_node_id: &NodeId,
        parent_id: &NodeId,
        reference_type_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
        callback: Option<MethodCallback>,
        input_argument_count: usize,
        output_argument_count: usize,
    ) -> Result<NodeId, StatusCode> {
        let mut node = Method::new(requested_node_id, browse_name, display_name);
        node.attached_method = callback;
        let method_id = self.add_node(node.into(), Some(parent_id), Some(reference_type_id), None, None)?;

        // Some clients (e.g. UaExpert) place a monitored item on
        // InputArguments, hence the short sampling interval.
        if input_argument_count > 0 {
            self.add_argument_property(&method_id, "InputArguments", 10_000.0)?;
        }
        if output_argument_count > 0 {
            self.add_argument_property(&method_id, "OutputArguments", 0.0)?;
        }
        Ok(method_id)
    }

    fn add_argument_property(
        &mut self,
        method_id: &NodeId,
        name: &str,
        minimum_sampling_interval: f64,
    ) -> Result<NodeId, StatusCode> {
        let namespace = self
            .store()
            .get(method_id)
            .map(|n| n.base().node_id().namespace)
            .unwrap_or(0);

        let mut property = Variable::new(&NodeId::new(namespace, 0u32), name, name);
        property.set_data_type(ids::data_type::BASE_DATA_TYPE);
        property.set_value_rank(1);
        property.minimum_sampling_interval = minimum_sampling_interval;

        self.add_node(
            property.into(),
            Some(method_id),
            Some(&ids::reference_type::HAS_PROPERTY),
            Some(&ids::variable_type::PROPERTY_TYPE),
            None,
        )
    }
}
