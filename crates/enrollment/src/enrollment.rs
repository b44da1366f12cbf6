use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillbridge_core::{DependentId, EngagementId, EnrollmentId, Entity};

/// A dependent's registration in an engagement.
///
/// # Invariants
/// - at most one enrollment per (dependent, engagement) pair (store
///   constraint, the authoritative guard against concurrent
///   double-enrollment)
/// - immutable once written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub dependent_id: DependentId,
    pub engagement_id: EngagementId,
    pub enrolled_at: DateTime<Utc>,
}

impl Entity for Enrollment {
    type Id = EnrollmentId;

    fn id(&self) -> &EnrollmentId {
        &self.id
    }
}
