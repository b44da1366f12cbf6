use std::sync::Arc;

use skillbridge_auth::{authorize, Account, Action};
use skillbridge_catalog::{NewOffering, Offering, OfferingPatch};
use skillbridge_core::{DomainError, DomainResult, OfferingId};
use skillbridge_store::{OfferingStore, Page};

/// Offering catalog.
///
/// Mutation is gated by role only; the creator reference is
/// informational and does not restrict later edits.
pub struct OfferingService {
    offerings: Arc<dyn OfferingStore>,
}

impl OfferingService {
    pub fn new(offerings: Arc<dyn OfferingStore>) -> Self {
        Self { offerings }
    }

    pub fn create(&self, actor: &Account, new: NewOffering) -> DomainResult<Offering> {
        authorize(actor, Action::ManageCatalog)?;
        new.validate()?;

        let created = self.offerings.insert(Some(actor.id), new)?;
        tracing::info!(offering = %created.id, name = %created.name, "offering created");
        Ok(created)
    }

    pub fn update(
        &self,
        actor: &Account,
        id: OfferingId,
        patch: OfferingPatch,
    ) -> DomainResult<Offering> {
        authorize(actor, Action::ManageCatalog)?;
        patch.validate()?;

        self.offerings.get(id)?.ok_or(DomainError::NotFound)?;
        Ok(self.offerings.update(id, patch)?)
    }

    pub fn delete(&self, actor: &Account, id: OfferingId) -> DomainResult<()> {
        authorize(actor, Action::ManageCatalog)?;
        self.offerings.delete(id)?;
        tracing::info!(offering = %id, "offering deleted");
        Ok(())
    }

    pub fn get(&self, actor: &Account, id: OfferingId) -> DomainResult<Offering> {
        authorize(actor, Action::ReadCatalog)?;
        self.offerings.get(id)?.ok_or(DomainError::NotFound)
    }

    pub fn list(&self, actor: &Account, page: Page) -> DomainResult<Vec<Offering>> {
        authorize(actor, Action::ReadCatalog)?;
        Ok(self.offerings.list(page)?)
    }
}
