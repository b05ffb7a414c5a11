use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverrideError {
    #[error("override {0} has neither an added nor a removed user")]
    NoUsers(String),
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserOverride {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub add_user: Option<UserRef>,
    #[serde(default)]
    pub remove_user: Option<UserRef>,
}

impl UserOverride {
    pub fn change(&self) -> Result<OverrideChange, OverrideError> {
        OverrideChange::from_users(&self.id, self.add_user.clone(), self.remove_user.clone())
    }
}

/// What an override does to the on-call roster during its window.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OverrideChange {
    Addition { add: UserRef },
    Removal { remove: UserRef },
    Replacement { add: UserRef, remove: UserRef },
}

impl OverrideChange {
    pub fn from_users(
        override_id: &str,
        add_user: Option<UserRef>,
        remove_user: Option<UserRef>,
    ) -> Result<Self, OverrideError> {
        match (add_user, remove_user) {
            (Some(add), Some(remove)) => Ok(OverrideChange::Replacement { add, remove }),
            (Some(add), None) => Ok(OverrideChange::Addition { add }),
            (None, Some(remove)) => Ok(OverrideChange::Removal { remove }),
            (None, None) => Err(OverrideError::NoUsers(override_id.to_string())),
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            OverrideChange::Addition { .. } => "Added",
            OverrideChange::Removal { .. } => "Removed",
            OverrideChange::Replacement { .. } => "Replaced",
        }
    }

    /// The user the override is "for": the added user when there is one.
    pub fn subject(&self) -> &UserRef {
        match self {
            OverrideChange::Addition { add } | OverrideChange::Replacement { add, .. } => add,
            OverrideChange::Removal { remove } => remove,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum TargetType {
    #[serde(rename = "userOverride")]
    UserOverride,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct TargetInput {
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub id: String,
}

impl TargetInput {
    pub fn user_override(id: impl Into<String>) -> Self {
        Self {
            target_type: TargetType::UserOverride,
            id: id.into(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorExtensions {
    #[serde(default)]
    pub is_field_error: bool,
    #[serde(default)]
    pub field_name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

impl GraphqlError {
    pub fn is_field_error(&self) -> bool {
        self.extensions
            .as_ref()
            .is_some_and(|ext| ext.is_field_error)
    }
}
