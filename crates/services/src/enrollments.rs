use std::sync::Arc;

use skillbridge_auth::{authorize, Account, Action, Role};
use skillbridge_core::{DependentId, DomainError, DomainResult, EngagementId};
use skillbridge_enrollment::Enrollment;
use skillbridge_store::{DependentStore, EngagementStore, EnrollmentStore, GuardianStore};

/// Enrollment of dependents into engagements.
pub struct EnrollmentService {
    guardians: Arc<dyn GuardianStore>,
    dependents: Arc<dyn DependentStore>,
    engagements: Arc<dyn EngagementStore>,
    enrollments: Arc<dyn EnrollmentStore>,
}

impl EnrollmentService {
    pub fn new(
        guardians: Arc<dyn GuardianStore>,
        dependents: Arc<dyn DependentStore>,
        engagements: Arc<dyn EngagementStore>,
        enrollments: Arc<dyn EnrollmentStore>,
    ) -> Self {
        Self {
            guardians,
            dependents,
            engagements,
            enrollments,
        }
    }

    /// Enroll one of the actor's dependents into an engagement.
    ///
    /// Dependent existence and guardianship are checked together: a
    /// dependent belonging to another guardian is indistinguishable
    /// from a nonexistent one. The duplicate pre-check gives the
    /// friendly error on the common path; the store's pair constraint
    /// is the authoritative guard under concurrency, so this operation
    /// must not be blindly retried; a `Conflict` on retry is safe to
    /// treat as success.
    pub fn enroll(
        &self,
        actor: &Account,
        dependent_id: DependentId,
        engagement_id: EngagementId,
    ) -> DomainResult<Enrollment> {
        authorize(actor, Action::ManageFamily)?;
        let guardian = self
            .guardians
            .find_by_account(actor.id)?
            .ok_or(DomainError::NotFound)?;

        self.engagements
            .get(engagement_id)?
            .ok_or(DomainError::NotFound)?;

        match self.dependents.get(dependent_id)? {
            Some(dependent) if dependent.guardian_id == guardian.id => {}
            _ => return Err(DomainError::NotFound),
        }

        if self
            .enrollments
            .find(dependent_id, engagement_id)?
            .is_some()
        {
            return Err(DomainError::conflict(
                "dependent is already enrolled in this engagement",
            ));
        }

        let created = self.enrollments.insert(dependent_id, engagement_id)?;
        tracing::info!(
            enrollment = %created.id,
            dependent = %dependent_id,
            engagement = %engagement_id,
            "dependent enrolled"
        );
        Ok(created)
    }

    /// Enrollments of one dependent. Gated to the owning guardian
    /// (admins may read any); a foreign dependent reads as missing.
    pub fn list_for_dependent(
        &self,
        actor: &Account,
        dependent_id: DependentId,
    ) -> DomainResult<Vec<Enrollment>> {
        authorize(actor, Action::ManageFamily)?;

        if actor.role != Role::Admin {
            let guardian = self
                .guardians
                .find_by_account(actor.id)?
                .ok_or(DomainError::NotFound)?;
            match self.dependents.get(dependent_id)? {
                Some(dependent) if dependent.guardian_id == guardian.id => {}
                _ => return Err(DomainError::NotFound),
            }
        }

        Ok(self.enrollments.list_by_dependent(dependent_id)?)
    }

    /// Enrollments of one engagement. Open to any authenticated role.
    pub fn list_for_engagement(
        &self,
        actor: &Account,
        engagement_id: EngagementId,
    ) -> DomainResult<Vec<Enrollment>> {
        authorize(actor, Action::ReadCatalog)?;
        Ok(self.enrollments.list_by_engagement(engagement_id)?)
    }
}
