// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! The value-shape fields shared by `Variable` and `VariableType` (§3):
//! `dataType`, `valueRank`, `arrayDimensions` and the value itself, which is
//! either inline data or a data-source callback pair.

use std::sync::Arc;

use opcua_addrspace_types::{ids, NodeId, StatusCode, Variant};

/// A live data-source: read on demand, optionally written back.
pub type DataSourceRead = Arc<dyn Fn(Option<u64>) -> Result<Variant, StatusCode> + Send + Sync>;
pub type DataSourceWrite =
    Arc<dyn Fn(Option<u64>, &Variant) -> Result<(), StatusCode> + Send + Sync>;

/// A handle-bearing pair of read/write callbacks, used instead of inline
/// data when a variable's value is produced by the embedding application
/// (`addDataSourceVariableNode`, §6).
#[derive(Clone)]
pub struct DataSourcePair {
    pub read: DataSourceRead,
    pub write: Option<DataSourceWrite>,
    pub handle: Option<u64>,
}

impl std::fmt::Debug for DataSourcePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSourcePair")
            .field("write", &self.write.is_some())
            .field("handle", &self.handle)
            .finish()
    }
}

/// Invoked after an inline value is written, e.g. to notify subscriptions;
/// a collaborator's concern this core only carries the hook for.
pub type ValueChangeCallback = Arc<dyn Fn(&NodeId, &Variant) + Send + Sync>;

/// Where a Variable/VariableType's current value comes from.
#[derive(Clone)]
pub enum ValueSource {
    /// An inline value, optionally notifying a callback when written.
    Data {
        value: Variant,
        on_change: Option<ValueChangeCallback>,
    },
    /// A live data source.
    DataSource(DataSourcePair),
}

impl std::fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Data { value, .. } => {
                f.debug_tuple("Data").field(value).finish()
            }
            ValueSource::DataSource(pair) => f.debug_tuple("DataSource").field(pair).finish(),
        }
    }
}

impl Default for ValueSource {
    fn default() -> Self {
        ValueSource::Data {
            value: Variant::Empty,
            on_change: None,
        }
    }
}

impl ValueSource {
    /// Read the current value without invoking any write-back. Used by the
    /// type checker (§4.F step 5) and by `addDataSourceVariableNode` (§6),
    /// which reads the source once before type-checking.
    pub fn read(&self, max_age: f64) -> Result<Variant, StatusCode> {
        let _ = max_age;
        match self {
            ValueSource::Data { value, .. } => Ok(value.clone()),
            ValueSource::DataSource(pair) => (pair.read)(pair.handle),
        }
    }

    /// Overwrite the current value. Only valid on inline data; writing a
    /// data-source-backed variable goes through its own `write` callback.
    /// Returns the `on_change` callback, if any, for the caller to invoke
    /// with the owning node's id once it is done mutating the node.
    pub fn set_inline(&mut self, new_value: Variant) -> Option<ValueChangeCallback> {
        if let ValueSource::Data { value, on_change } = self {
            *value = new_value;
            on_change.clone()
        } else {
            None
        }
    }
}

/// The fields `Variable` and `VariableType` both carry (§3).
#[derive(Debug, Clone)]
pub struct ValueAttributes {
    pub data_type: NodeId,
    pub value_rank: i32,
    pub array_dimensions: Vec<u32>,
    pub value: ValueSource,
}

impl Default for ValueAttributes {
    fn default() -> Self {
        Self {
            data_type: ids::data_type::BASE_DATA_TYPE,
            value_rank: 0,
            array_dimensions: Vec::new(),
            value: ValueSource::default(),
        }
    }
}
