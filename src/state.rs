use crate::schedule::{
    ApiError, OverrideChange, OverrideError, TargetInput, TimeZoneParam, UserOverride,
    format_override_time,
};

pub const DIALOG_TITLE: &str = "Are you sure?";

/// Confirmation copy derived once from a fetched override.
#[derive(Clone, PartialEq, Debug)]
pub struct OverrideDetails {
    pub change: OverrideChange,
    pub time: String,
}

impl OverrideDetails {
    pub fn from_override(
        user_override: &UserOverride,
        zone: TimeZoneParam,
    ) -> Result<Self, OverrideError> {
        Ok(Self {
            change: user_override.change()?,
            time: format_override_time(user_override.start, user_override.end, zone),
        })
    }

    pub fn caption(&self) -> String {
        let verb = self.change.verb();
        match &self.change {
            OverrideChange::Replacement { remove, .. } => {
                format!("{} {} from {}", verb, remove.name, self.time)
            }
            _ => format!("{} from {}", verb, self.time),
        }
    }

    pub fn subtitle(&self) -> String {
        format!(
            "This will delete the override for: {}",
            self.change.subject().name
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Confirmation {
    pub details: OverrideDetails,
    pub is_submitting: bool,
    pub errors: Vec<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum DialogPhase {
    Loading,
    Failed(String),
    Ready(Confirmation),
    Closed,
}

#[derive(Clone, Debug)]
pub struct DialogState {
    pub override_id: String,
    pub zone: TimeZoneParam,
    pub phase: DialogPhase,
}

impl DialogState {
    pub fn new(override_id: impl Into<String>, zone: TimeZoneParam) -> Self {
        Self {
            override_id: override_id.into(),
            zone,
            phase: DialogPhase::Loading,
        }
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.phase {
            DialogPhase::Ready(confirmation) => Some(confirmation),
            _ => None,
        }
    }

    /// Window chrome is only shown alongside the confirmation dialog.
    pub fn header_id(&self) -> Option<&str> {
        self.confirmation().map(|_| self.override_id.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.confirmation().is_some_and(|c| c.is_submitting)
    }

    pub fn finish_fetch(&mut self, result: Result<UserOverride, ApiError>) {
        let details = result
            .map_err(|e| e.to_string())
            .and_then(|found| {
                OverrideDetails::from_override(&found, self.zone).map_err(|e| e.to_string())
            });

        self.phase = match details {
            Ok(details) => DialogPhase::Ready(Confirmation {
                details,
                is_submitting: false,
                errors: Vec::new(),
            }),
            Err(message) => DialogPhase::Failed(message),
        };
    }

    /// Marks the dialog as submitting and returns the delete targets.
    /// Returns `None` when there is nothing to confirm or a delete is already
    /// in flight.
    pub fn begin_delete(&mut self) -> Option<Vec<TargetInput>> {
        let DialogPhase::Ready(confirmation) = &mut self.phase else {
            return None;
        };
        if confirmation.is_submitting {
            return None;
        }
        confirmation.is_submitting = true;
        confirmation.errors.clear();
        Some(vec![TargetInput::user_override(self.override_id.clone())])
    }

    /// Records the delete outcome. Returns true when the dialog should close.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> bool {
        let DialogPhase::Ready(confirmation) = &mut self.phase else {
            return false;
        };
        match result {
            Ok(()) => {
                self.phase = DialogPhase::Closed;
                true
            }
            Err(e) => {
                confirmation.is_submitting = false;
                confirmation.errors = e.non_field_errors();
                false
            }
        }
    }

    /// Dismissal is ignored while a delete is in flight.
    pub fn dismiss(&mut self) -> bool {
        if self.is_submitting() || self.phase == DialogPhase::Closed {
            return false;
        }
        self.phase = DialogPhase::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::{ErrorExtensions, GraphqlError, UserRef};
    use chrono::{DateTime, Utc};

    const UTC: TimeZoneParam = TimeZoneParam::Named(chrono_tz::Tz::UTC);
    const RANGE: &str = "Jan 1, 2024, 12:00 AM to Jan 2, 2024, 12:00 AM";

    fn user(id: &str, name: &str) -> Option<UserRef> {
        Some(UserRef {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn sample(add_user: Option<UserRef>, remove_user: Option<UserRef>) -> UserOverride {
        UserOverride {
            id: "o1".to_string(),
            start: ts("2024-01-01T00:00:00Z"),
            end: ts("2024-01-02T00:00:00Z"),
            add_user,
            remove_user,
        }
    }

    fn ready(user_override: UserOverride) -> DialogState {
        let mut state = DialogState::new("o1", UTC);
        state.finish_fetch(Ok(user_override));
        state
    }

    #[test]
    fn test_addition_copy() {
        let details = OverrideDetails::from_override(&sample(user("u1", "Alice"), None), UTC).unwrap();
        assert_eq!(details.caption(), format!("Added from {RANGE}"));
        assert_eq!(details.subtitle(), "This will delete the override for: Alice");
    }

    #[test]
    fn test_removal_copy() {
        let details = OverrideDetails::from_override(&sample(None, user("u2", "Carol")), UTC).unwrap();
        assert_eq!(details.caption(), format!("Removed from {RANGE}"));
        assert_eq!(details.subtitle(), "This will delete the override for: Carol");
    }

    #[test]
    fn test_replacement_copy() {
        let details = OverrideDetails::from_override(
            &sample(user("u1", "Bob"), user("u2", "Carol")),
            UTC,
        )
        .unwrap();
        assert_eq!(details.caption(), format!("Replaced Carol from {RANGE}"));
        assert_eq!(details.subtitle(), "This will delete the override for: Bob");
    }

    #[test]
    fn test_local_zone_copy() {
        let details = OverrideDetails::from_override(
            &sample(user("u1", "Alice"), None),
            TimeZoneParam::Local,
        )
        .unwrap();
        assert!(details.caption().starts_with("Added from "));
        assert!(details.caption().contains(" to "));
        assert_eq!(details.subtitle(), "This will delete the override for: Alice");
    }

    #[test]
    fn test_starts_loading() {
        let state = DialogState::new("o1", UTC);
        assert_eq!(state.phase, DialogPhase::Loading);
        assert!(state.confirmation().is_none());
    }

    #[test]
    fn test_fetch_failure_is_terminal() {
        let mut state = DialogState::new("o1", UTC);
        state.finish_fetch(Err(ApiError::NotFound("o1".to_string())));
        assert_eq!(
            state.phase,
            DialogPhase::Failed("Override not found: o1".to_string())
        );
        assert!(state.begin_delete().is_none());
    }

    #[test]
    fn test_header_only_when_ready() {
        let mut state = DialogState::new("o1", UTC);
        assert_eq!(state.header_id(), None);

        state.finish_fetch(Err(ApiError::MissingData));
        assert_eq!(state.header_id(), None);

        let state = ready(sample(user("u1", "Alice"), None));
        assert_eq!(state.header_id(), Some("o1"));
    }

    #[test]
    fn test_fetch_without_users_fails() {
        let mut state = DialogState::new("o1", UTC);
        state.finish_fetch(Ok(sample(None, None)));
        assert!(matches!(state.phase, DialogPhase::Failed(ref msg) if msg.contains("neither")));
    }

    #[test]
    fn test_begin_delete_targets_override() {
        let mut state = ready(sample(user("u1", "Alice"), None));
        let targets = state.begin_delete().unwrap();
        assert_eq!(targets, vec![TargetInput::user_override("o1")]);
        assert!(state.is_submitting());
    }

    #[test]
    fn test_duplicate_submit_is_suppressed() {
        let mut state = ready(sample(user("u1", "Alice"), None));
        assert!(state.begin_delete().is_some());
        assert!(state.begin_delete().is_none());
        assert!(!state.dismiss());
    }

    #[test]
    fn test_delete_success_closes_once() {
        let mut state = ready(sample(user("u1", "Alice"), None));
        state.begin_delete();
        assert!(state.finish_delete(Ok(())));
        assert_eq!(state.phase, DialogPhase::Closed);
        assert!(!state.finish_delete(Ok(())));
        assert!(!state.dismiss());
    }

    #[test]
    fn test_delete_failure_keeps_dialog_open() {
        let mut state = ready(sample(user("u1", "Alice"), None));
        state.begin_delete();
        let err = ApiError::Graphql(vec![
            GraphqlError {
                message: "override already started".to_string(),
                    extensions: None,
            },
            GraphqlError {
                message: "bad id".to_string(),
                    extensions: Some(ErrorExtensions {
                    is_field_error: true,
                    field_name: Some("id".to_string()),
                }),
            },
        ]);
        assert!(!state.finish_delete(Err(err)));

        let confirmation = state.confirmation().unwrap();
        assert!(!confirmation.is_submitting);
        assert_eq!(confirmation.errors, vec!["override already started".to_string()]);

        // retry clears the previous errors
        assert!(state.begin_delete().is_some());
        assert!(state.confirmation().unwrap().errors.is_empty());
    }

    #[test]
    fn test_dismiss_without_confirming() {
        let mut state = ready(sample(None, user("u2", "Carol")));
        assert!(state.dismiss());
        assert_eq!(state.phase, DialogPhase::Closed);
        assert!(!state.dismiss());
    }
}
