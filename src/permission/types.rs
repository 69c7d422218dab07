//! Table and form shapes for the role permission screen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::permission::action::{Action, CrudAction, Permission};

fn is_false(value: &bool) -> bool {
    !*value
}

/// One boolean per well-known action plus the module's other permissions.
///
/// `others` holds full `"<module>.<action>"` strings, not bare action names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlags {
    #[serde(default, skip_serializing_if = "is_false")]
    pub index: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub show: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub store: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub update: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub destroy: bool,
    #[serde(default)]
    pub others: Vec<String>,
}

impl PermissionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, action: CrudAction) -> bool {
        match action {
            CrudAction::Index => self.index,
            CrudAction::Show => self.show,
            CrudAction::Store => self.store,
            CrudAction::Update => self.update,
            CrudAction::Destroy => self.destroy,
        }
    }

    pub fn set(&mut self, action: CrudAction, value: bool) {
        let flag = match action {
            CrudAction::Index => &mut self.index,
            CrudAction::Show => &mut self.show,
            CrudAction::Store => &mut self.store,
            CrudAction::Update => &mut self.update,
            CrudAction::Destroy => &mut self.destroy,
        };
        *flag = value;
    }

    /// Builder-style [`set`](Self::set) to `true`.
    pub fn with(mut self, action: CrudAction) -> Self {
        self.set(action, true);
        self
    }

    /// Well-known actions that are set, in column order.
    pub fn granted(&self) -> impl Iterator<Item = CrudAction> + '_ {
        CrudAction::ALL.into_iter().filter(|a| self.get(*a))
    }

    /// True when no flag is set and there are no other permissions.
    pub fn is_empty(&self) -> bool {
        self.granted().next().is_none() && self.others.is_empty()
    }

    /// OR the flags and append the other permissions of `other`.
    pub fn merge(&mut self, other: &PermissionFlags) {
        for action in other.granted() {
            self.set(action, true);
        }
        self.others.extend(other.others.iter().cloned());
    }
}

/// A checkbox-grid row: one per module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionTableRow {
    pub module: String,
    #[serde(flatten)]
    pub flags: PermissionFlags,
}

impl PermissionTableRow {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            flags: PermissionFlags::new(),
        }
    }
}

/// Form state keyed by module, in module name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionFormState {
    modules: BTreeMap<String, PermissionFlags>,
}

impl PermissionFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one permission: well-known actions set their flag, others are
    /// appended to the module's list as the full permission string.
    pub fn grant(&mut self, permission: &Permission) {
        let flags = self.modules.entry(permission.module.clone()).or_default();
        match &permission.action {
            Action::WellKnown(action) => flags.set(*action, true),
            Action::Other(_) => flags.others.push(permission.to_string()),
        }
    }

    pub fn is_granted(&self, permission: &Permission) -> bool {
        let Some(flags) = self.modules.get(&permission.module) else {
            return false;
        };
        match &permission.action {
            Action::WellKnown(action) => flags.get(*action),
            Action::Other(_) => {
                let full = permission.to_string();
                flags.others.iter().any(|p| *p == full)
            }
        }
    }

    pub fn insert(&mut self, module: impl Into<String>, flags: PermissionFlags) {
        self.modules.insert(module.into(), flags);
    }

    pub fn module(&self, module: &str) -> Option<&PermissionFlags> {
        self.modules.get(module)
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PermissionFlags)> {
        self.modules.iter().map(|(m, f)| (m.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_get_set() {
        let mut flags = PermissionFlags::new();
        assert!(flags.is_empty());
        flags.set(CrudAction::Update, true);
        assert!(flags.get(CrudAction::Update));
        assert!(!flags.get(CrudAction::Index));
        assert_eq!(flags.granted().collect::<Vec<_>>(), vec![CrudAction::Update]);
    }

    #[test]
    fn test_merge_ors_and_concatenates() {
        let mut a = PermissionFlags::new().with(CrudAction::Index);
        a.others.push("page.publish".to_string());
        let mut b = PermissionFlags::new().with(CrudAction::Store);
        b.others.push("page.publish".to_string());

        a.merge(&b);
        assert!(a.index && a.store);
        assert_eq!(a.others, vec!["page.publish", "page.publish"]);
    }

    #[test]
    fn test_row_json_is_flat() {
        let row = PermissionTableRow {
            module: "news".to_string(),
            flags: PermissionFlags::new().with(CrudAction::Show),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"module":"news","show":true,"others":[]}"#);
    }

    #[test]
    fn test_form_state_json() {
        let json = r#"{"page": {"index": true, "others": ["page.custom"]}}"#;
        let state: PermissionFormState = serde_json::from_str(json).unwrap();
        let flags = state.module("page").unwrap();
        assert!(flags.index);
        assert!(!flags.store);
        assert_eq!(flags.others, vec!["page.custom"]);
    }

    #[test]
    fn test_grant_and_is_granted() {
        let mut state = PermissionFormState::new();
        let custom: Permission = "faq.reorder".parse().unwrap();
        state.grant(&custom);
        state.grant(&Permission::well_known("faq", CrudAction::Destroy));

        assert!(state.is_granted(&custom));
        assert!(state.is_granted(&Permission::well_known("faq", CrudAction::Destroy)));
        assert!(!state.is_granted(&Permission::well_known("faq", CrudAction::Index)));
        assert!(!state.is_granted(&Permission::well_known("banner", CrudAction::Index)));
    }
}
