use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillbridge_core::{AccountId, DomainError, DomainResult, EngagementId, Entity, OfferingId};

/// Engagement lifecycle status.
///
/// Scheduled may move to Completed or Cancelled; the terminal states
/// accept no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl EngagementStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, EngagementStatus::Completed | EngagementStatus::Cancelled)
    }

    /// Check a requested transition against the status graph.
    ///
    /// Re-asserting the current status is accepted as a no-op write;
    /// any move out of a terminal state is a conflict.
    pub fn ensure_transition(self, next: EngagementStatus) -> DomainResult<()> {
        if self == next {
            return Ok(());
        }
        if self.is_terminal() {
            return Err(DomainError::conflict(format!(
                "engagement is already {self}"
            )));
        }
        Ok(())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EngagementStatus::Scheduled => "scheduled",
            EngagementStatus::Completed => "completed",
            EngagementStatus::Cancelled => "cancelled",
        }
    }
}

impl core::fmt::Display for EngagementStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled instance of an offering, presented by one account.
///
/// The presenter is the only account permitted to mutate or delete the
/// engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub id: EngagementId,
    pub offering_id: OfferingId,
    pub presenter_id: AccountId,
    pub title: String,
    pub description: Option<String>,
    pub schedule: DateTime<Utc>,
    /// External meeting link (Zoom, Meet, ...).
    pub meeting_link: Option<String>,
    pub status: EngagementStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for Engagement {
    type Id = EngagementId;

    fn id(&self) -> &EngagementId {
        &self.id
    }
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("title cannot be empty"));
    }
    Ok(())
}

/// Fields for scheduling an engagement. Status always starts Scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEngagement {
    pub offering_id: OfferingId,
    pub title: String,
    pub description: Option<String>,
    pub schedule: DateTime<Utc>,
    pub meeting_link: Option<String>,
}

impl NewEngagement {
    pub fn validate(&self) -> DomainResult<()> {
        validate_title(&self.title)
    }
}

/// Partial engagement update (unset fields keep their stored value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<DateTime<Utc>>,
    pub meeting_link: Option<String>,
    pub status: Option<EngagementStatus>,
}

impl EngagementPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}

impl Engagement {
    /// Apply a pre-validated partial update in place.
    ///
    /// Callers must have checked the status transition against the
    /// current record first.
    pub fn apply(&mut self, patch: EngagementPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(schedule) = patch.schedule {
            self.schedule = schedule;
        }
        if let Some(meeting_link) = patch.meeting_link {
            self.meeting_link = Some(meeting_link);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_reaches_both_terminal_states() {
        assert!(EngagementStatus::Scheduled
            .ensure_transition(EngagementStatus::Completed)
            .is_ok());
        assert!(EngagementStatus::Scheduled
            .ensure_transition(EngagementStatus::Cancelled)
            .is_ok());
    }

    #[test]
    fn terminal_states_are_sealed() {
        for terminal in [EngagementStatus::Completed, EngagementStatus::Cancelled] {
            for next in [
                EngagementStatus::Scheduled,
                EngagementStatus::Completed,
                EngagementStatus::Cancelled,
            ] {
                let result = terminal.ensure_transition(next);
                if next == terminal {
                    assert!(result.is_ok(), "{terminal} -> {next} should be a no-op");
                } else {
                    assert!(
                        matches!(result, Err(DomainError::Conflict(_))),
                        "{terminal} -> {next} should conflict"
                    );
                }
            }
        }
    }

    #[test]
    fn reasserting_current_status_is_a_no_op() {
        assert!(EngagementStatus::Scheduled
            .ensure_transition(EngagementStatus::Scheduled)
            .is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let new = NewEngagement {
            offering_id: OfferingId::new(1),
            title: " ".to_string(),
            description: None,
            schedule: Utc::now(),
            meeting_link: None,
        };
        assert!(new.validate().is_err());
    }
}
