// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `AccessLevel`.

use bitflags::bitflags;

bitflags! {
    /// Indicates whether a variable's current value is readable/writable,
    /// and whether history is available. Stored on [`crate::NodeClass::Variable`]
    /// nodes; enforced by the read/write services, a collaborator out of
    /// scope for this core (§1).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AccessLevel: u8 {
        /// The current value can be read.
        const CURRENT_READ = 1 << 0;
        /// The current value can be written.
        const CURRENT_WRITE = 1 << 1;
        /// Historical values can be read.
        const HISTORY_READ = 1 << 2;
        /// Historical values can be written.
        const HISTORY_WRITE = 1 << 3;
    }
}
