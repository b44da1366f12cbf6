use std::sync::Arc;

use skillbridge_auth::{authorize, require_owner, Account, Action};
use skillbridge_catalog::{Engagement, EngagementPatch, NewEngagement};
use skillbridge_core::{DomainError, DomainResult, EngagementId, OfferingId};
use skillbridge_store::{EngagementStore, OfferingStore, Page};

/// Scheduled engagements and their status lifecycle.
pub struct EngagementService {
    offerings: Arc<dyn OfferingStore>,
    engagements: Arc<dyn EngagementStore>,
}

impl EngagementService {
    pub fn new(offerings: Arc<dyn OfferingStore>, engagements: Arc<dyn EngagementStore>) -> Self {
        Self {
            offerings,
            engagements,
        }
    }

    /// Schedule an engagement for an existing offering. The actor
    /// becomes its presenter.
    pub fn create(&self, actor: &Account, new: NewEngagement) -> DomainResult<Engagement> {
        authorize(actor, Action::ManageCatalog)?;
        new.validate()?;

        self.offerings
            .get(new.offering_id)?
            .ok_or(DomainError::NotFound)?;

        let created = self.engagements.insert(actor.id, new)?;
        tracing::info!(
            engagement = %created.id,
            offering = %created.offering_id,
            presenter = %created.presenter_id,
            "engagement scheduled"
        );
        Ok(created)
    }

    /// Update an engagement. Only the presenter may mutate; there is
    /// no admin bypass. A status change is checked against the transition graph;
    /// terminal states accept no further moves.
    pub fn update(
        &self,
        actor: &Account,
        id: EngagementId,
        patch: EngagementPatch,
    ) -> DomainResult<Engagement> {
        authorize(actor, Action::ManageCatalog)?;

        let existing = self.engagements.get(id)?.ok_or(DomainError::NotFound)?;
        require_owner(actor, existing.presenter_id)?;

        patch.validate()?;
        if let Some(next) = patch.status {
            existing.status.ensure_transition(next)?;
        }

        Ok(self.engagements.update(id, patch)?)
    }

    /// Delete an engagement. Presenter only; no admin bypass.
    pub fn delete(&self, actor: &Account, id: EngagementId) -> DomainResult<()> {
        authorize(actor, Action::ManageCatalog)?;

        let existing = self.engagements.get(id)?.ok_or(DomainError::NotFound)?;
        require_owner(actor, existing.presenter_id)?;

        self.engagements.delete(id)?;
        tracing::info!(engagement = %id, "engagement deleted");
        Ok(())
    }

    pub fn get(&self, actor: &Account, id: EngagementId) -> DomainResult<Engagement> {
        authorize(actor, Action::ReadCatalog)?;
        self.engagements.get(id)?.ok_or(DomainError::NotFound)
    }

    pub fn list(&self, actor: &Account, page: Page) -> DomainResult<Vec<Engagement>> {
        authorize(actor, Action::ReadCatalog)?;
        Ok(self.engagements.list(page)?)
    }

    pub fn list_by_offering(
        &self,
        actor: &Account,
        offering_id: OfferingId,
    ) -> DomainResult<Vec<Engagement>> {
        authorize(actor, Action::ReadCatalog)?;
        Ok(self.engagements.list_by_offering(offering_id)?)
    }

    pub fn list_by_presenter(&self, actor: &Account) -> DomainResult<Vec<Engagement>> {
        authorize(actor, Action::ReadCatalog)?;
        Ok(self.engagements.list_by_presenter(actor.id)?)
    }
}
