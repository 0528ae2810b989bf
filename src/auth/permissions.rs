//! Capability table
//!
//! Every directory entry point names the operation it performs and calls
//! [`authorize`] before touching storage. The table below is the only place
//! that decides which roles may do what.

use super::role::{Identity, Role};
use crate::error::AccessDenied;
use log::warn;
use std::fmt;

/// Operations gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateRecord,
    ListRecords,
    FindRecord,
    UpdateRecord,
    DeleteRecord,
    DeleteAllRecords,
    ListUsers,
    DeleteUser,
}

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Staff, Role::Guest];
const RECORD_EDITORS: &[Role] = &[Role::Admin, Role::Staff];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// (operation, roles permitted to perform it)
const CAPABILITIES: &[(Operation, &[Role])] = &[
    (Operation::CreateRecord, RECORD_EDITORS),
    (Operation::ListRecords, ALL_ROLES),
    // Guests may list but not look up a single record.
    (Operation::FindRecord, RECORD_EDITORS),
    (Operation::UpdateRecord, RECORD_EDITORS),
    (Operation::DeleteRecord, RECORD_EDITORS),
    (Operation::DeleteAllRecords, ADMIN_ONLY),
    (Operation::ListUsers, ADMIN_ONLY),
    (Operation::DeleteUser, ADMIN_ONLY),
];

impl Operation {
    pub fn describe(&self) -> &'static str {
        match self {
            Operation::CreateRecord => "create records",
            Operation::ListRecords => "list records",
            Operation::FindRecord => "search records",
            Operation::UpdateRecord => "update records",
            Operation::DeleteRecord => "delete records",
            Operation::DeleteAllRecords => "delete all records",
            Operation::ListUsers => "list users",
            Operation::DeleteUser => "delete users",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Returns whether `role` may perform `operation`.
pub fn is_permitted(operation: Operation, role: Role) -> bool {
    CAPABILITIES
        .iter()
        .find(|(op, _)| *op == operation)
        .is_some_and(|(_, roles)| roles.contains(&role))
}

/// Checks the identity's role against the capability table.
pub fn authorize(identity: &Identity, operation: Operation) -> Result<(), AccessDenied> {
    if is_permitted(operation, identity.role()) {
        Ok(())
    } else {
        warn!(
            "Denied {} to {} ({})",
            operation,
            identity.username(),
            identity.role()
        );
        Err(AccessDenied {
            operation,
            role: identity.role(),
        })
    }
}
