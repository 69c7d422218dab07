//! Permission strings of the form `"<module>.<action>"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a permission string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("Empty permission string")]
    Empty,

    #[error("Permission '{0}' has no '.' between module and action")]
    MissingSeparator(String),

    #[error("Permission '{0}' has an empty module")]
    EmptyModule(String),

    #[error("Permission '{0}' has an empty action")]
    EmptyAction(String),
}

/// The five CRUD-style actions with a dedicated checkbox column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrudAction {
    Index,
    Show,
    Store,
    Update,
    Destroy,
}

impl CrudAction {
    /// All actions in column order.
    pub const ALL: [CrudAction; 5] = [
        CrudAction::Index,
        CrudAction::Show,
        CrudAction::Store,
        CrudAction::Update,
        CrudAction::Destroy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrudAction::Index => "index",
            CrudAction::Show => "show",
            CrudAction::Store => "store",
            CrudAction::Update => "update",
            CrudAction::Destroy => "destroy",
        }
    }
}

impl FromStr for CrudAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CrudAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for CrudAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The action part of a permission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    WellKnown(CrudAction),
    /// Any other capability, kept verbatim
    Other(String),
}

impl Action {
    pub fn parse(s: &str) -> Self {
        match s.parse::<CrudAction>() {
            Ok(action) => Action::WellKnown(action),
            Err(()) => Action::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::WellKnown(action) => action.as_str(),
            Action::Other(s) => s,
        }
    }
}

/// A parsed `"<module>.<action>"` permission.
///
/// The string is split at the first `.`; anything after it is the action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission {
    pub module: String,
    pub action: Action,
}

impl Permission {
    pub fn new(module: impl Into<String>, action: Action) -> Self {
        Self {
            module: module.into(),
            action,
        }
    }

    pub fn well_known(module: impl Into<String>, action: CrudAction) -> Self {
        Self::new(module, Action::WellKnown(action))
    }

    pub fn is_well_known(&self) -> bool {
        matches!(self.action, Action::WellKnown(_))
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PermissionError::Empty);
        }
        let (module, action) = s
            .split_once('.')
            .ok_or_else(|| PermissionError::MissingSeparator(s.to_string()))?;
        if module.is_empty() {
            return Err(PermissionError::EmptyModule(s.to_string()));
        }
        if action.is_empty() {
            return Err(PermissionError::EmptyAction(s.to_string()));
        }
        Ok(Self::new(module, Action::parse(action)))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.action.as_str())
    }
}
