//! Conversions between flat permission lists, table rows and form state.
//!
//! Malformed strings (no `.`, empty module or action) are skipped with a
//! warning; the conversions themselves never fail.

use std::collections::HashMap;

use crate::permission::action::{Action, Permission};
use crate::permission::types::{PermissionFormState, PermissionTableRow};

fn parse_or_skip(raw: &str) -> Option<Permission> {
    match raw.parse::<Permission>() {
        Ok(permission) => Some(permission),
        Err(e) => {
            log::warn!("Skipping permission: {}", e);
            None
        }
    }
}

/// Flatten form state into permission strings.
///
/// Emits `"<module>.<action>"` for every set flag and each entry of
/// `others` verbatim. Order carries no meaning; treat the result as a set.
pub fn flatten_form_to_list(state: &PermissionFormState) -> Vec<String> {
    let mut list = Vec::new();
    for (module, flags) in state.iter() {
        for action in flags.granted() {
            list.push(format!("{}.{}", module, action));
        }
        list.extend(flags.others.iter().cloned());
    }
    list
}

/// Group a catalogue of grantable permissions into one row per module.
///
/// Rows appear in the order their module is first seen. Repeated entries
/// for a module merge into its row: flags are OR-ed, others concatenated.
pub fn group_list_into_table_rows<S: AsRef<str>>(list: &[S]) -> Vec<PermissionTableRow> {
    let mut rows: Vec<PermissionTableRow> = Vec::new();
    let mut index_by_module: HashMap<String, usize> = HashMap::new();

    for permission in list.iter().filter_map(|raw| parse_or_skip(raw.as_ref())) {
        let index = *index_by_module
            .entry(permission.module.clone())
            .or_insert_with(|| {
                rows.push(PermissionTableRow::new(permission.module.clone()));
                rows.len() - 1
            });
        let flags = &mut rows[index].flags;
        match &permission.action {
            Action::WellKnown(action) => flags.set(*action, true),
            Action::Other(_) => flags.others.push(permission.to_string()),
        }
    }

    rows
}

/// Build form state from the permissions currently assigned to a role.
///
/// Well-known actions set their flag (repeats are harmless); other actions
/// are appended to the module's `others` in encounter order.
pub fn group_list_into_form_state<S: AsRef<str>>(list: &[S]) -> PermissionFormState {
    let mut state = PermissionFormState::new();
    for permission in list.iter().filter_map(|raw| parse_or_skip(raw.as_ref())) {
        state.grant(&permission);
    }
    state
}
