//! Role permission matrix codec.
//!
//! Roles carry a flat list of `"<module>.<action>"` strings. The role screen
//! renders them as a checkbox grid (one [`PermissionTableRow`] per module)
//! bound to a [`PermissionFormState`]; on submit the form is flattened back
//! into a list.

mod action;
mod codec;
mod types;

#[cfg(test)]
mod tests;

pub use action::{Action, CrudAction, Permission, PermissionError};
pub use codec::{flatten_form_to_list, group_list_into_form_state, group_list_into_table_rows};
pub use types::{PermissionFlags, PermissionFormState, PermissionTableRow};
