use std::sync::Arc;

use skillbridge_auth::{authorize, require_owner, Account, Action};
use skillbridge_catalog::{NewVideo, Video, VideoPatch};
use skillbridge_core::{DomainError, DomainResult, OfferingId, VideoId};
use skillbridge_store::{OfferingStore, Page, VideoStore};

/// Video links attached to offerings.
pub struct VideoService {
    offerings: Arc<dyn OfferingStore>,
    videos: Arc<dyn VideoStore>,
}

impl VideoService {
    pub fn new(offerings: Arc<dyn OfferingStore>, videos: Arc<dyn VideoStore>) -> Self {
        Self { offerings, videos }
    }

    /// Add a video link to an existing offering.
    pub fn create(&self, actor: &Account, new: NewVideo) -> DomainResult<Video> {
        authorize(actor, Action::ManageCatalog)?;
        new.validate()?;

        self.offerings
            .get(new.offering_id)?
            .ok_or(DomainError::NotFound)?;

        let created = self.videos.insert(actor.id, new)?;
        tracing::info!(video = %created.id, offering = %created.offering_id, "video added");
        Ok(created)
    }

    /// Update a video. Creator only; no admin bypass.
    pub fn update(&self, actor: &Account, id: VideoId, patch: VideoPatch) -> DomainResult<Video> {
        authorize(actor, Action::ManageCatalog)?;

        let existing = self.videos.get(id)?.ok_or(DomainError::NotFound)?;
        require_owner(actor, existing.created_by)?;

        patch.validate()?;
        Ok(self.videos.update(id, patch)?)
    }

    /// Delete a video. Creator only; no admin bypass.
    pub fn delete(&self, actor: &Account, id: VideoId) -> DomainResult<()> {
        authorize(actor, Action::ManageCatalog)?;

        let existing = self.videos.get(id)?.ok_or(DomainError::NotFound)?;
        require_owner(actor, existing.created_by)?;

        self.videos.delete(id)?;
        tracing::info!(video = %id, "video deleted");
        Ok(())
    }

    pub fn get(&self, actor: &Account, id: VideoId) -> DomainResult<Video> {
        authorize(actor, Action::ReadCatalog)?;
        self.videos.get(id)?.ok_or(DomainError::NotFound)
    }

    pub fn list(&self, actor: &Account, page: Page) -> DomainResult<Vec<Video>> {
        authorize(actor, Action::ReadCatalog)?;
        Ok(self.videos.list(page)?)
    }

    pub fn list_by_offering(
        &self,
        actor: &Account,
        offering_id: OfferingId,
    ) -> DomainResult<Vec<Video>> {
        authorize(actor, Action::ReadCatalog)?;
        Ok(self.videos.list_by_offering(offering_id)?)
    }
}
