// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `WriteMask`.

use bitflags::bitflags;

bitflags! {
    /// Indicates which attributes of a node are writable by clients. Stored
    /// per-node (`writeMask` / `userWriteMask` in the common header, §3) but
    /// enforced by the attribute-write service, a collaborator out of scope
    /// for this core (§1).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WriteMask: u32 {
        /// The `BrowseName` attribute is writable.
        const BROWSE_NAME = 1 << 2;
        /// The `DisplayName` attribute is writable.
        const DISPLAY_NAME = 1 << 3;
        /// The `Description` attribute is writable.
        const DESCRIPTION = 1 << 4;
        /// The `WriteMask` attribute itself is writable.
        const WRITE_MASK = 1 << 5;
        /// The `UserWriteMask` attribute is writable.
        const USER_WRITE_MASK = 1 << 6;
        /// The `IsAbstract` attribute is writable.
        const IS_ABSTRACT = 1 << 7;
        /// The `Symmetric` attribute is writable.
        const SYMMETRIC = 1 << 8;
        /// The `InverseName` attribute is writable.
        const INVERSE_NAME = 1 << 9;
        /// The `ContainsNoLoops` attribute is writable.
        const CONTAINS_NO_LOOPS = 1 << 10;
        /// The `EventNotifier` attribute is writable.
        const EVENT_NOTIFIER = 1 << 11;
        /// The variable's `Value` attribute is writable (for VariableType nodes).
        const VALUE_FOR_VARIABLE_TYPE = 1 << 12;
        /// The `DataType` attribute is writable.
        const DATA_TYPE = 1 << 13;
        /// The `ValueRank` attribute is writable.
        const VALUE_RANK = 1 << 14;
        /// The `ArrayDimensions` attribute is writable.
        const ARRAY_DIMENSIONS = 1 << 15;
        /// The `AccessLevel` attribute is writable.
        const ACCESS_LEVEL = 1 << 16;
        /// The `UserAccessLevel` attribute is writable.
        const USER_ACCESS_LEVEL = 1 << 17;
        /// The `MinimumSamplingInterval` attribute is writable.
        const MINIMUM_SAMPLING_INTERVAL = 1 << 18;
        /// The `Historizing` attribute is writable.
        const HISTORIZING = 1 << 19;
        /// The `Executable` attribute is writable.
        const EXECUTABLE = 1 << 20;
        /// The `UserExecutable` attribute is writable.
        const USER_EXECUTABLE = 1 << 21;
    }
}
