//! Store collaborator contracts, one trait per entity.
//!
//! Implementations assign record identifiers and creation timestamps
//! (the relational equivalent of autoincrement keys and server-side
//! defaults). Uniqueness constraints named on each method are enforced
//! by the implementation; they are the authoritative guard under
//! concurrent execution; service-level pre-checks are advisory.

use skillbridge_auth::{Account, AccountPatch, NewAccount};
use skillbridge_catalog::{
    Engagement, EngagementPatch, NewEngagement, NewOffering, NewVideo, Offering, OfferingPatch,
    Video, VideoPatch,
};
use skillbridge_core::{
    AccountId, DependentId, EngagementId, GuardianId, OfferingId, SubjectId, VideoId,
};
use skillbridge_enrollment::Enrollment;
use skillbridge_families::{Dependent, DependentPatch, Guardian, NewDependent, NewGuardian};

use crate::{Page, StoreError};

pub trait AccountStore: Send + Sync {
    /// Insert a new account. Unique on `subject`.
    fn insert(&self, new: NewAccount) -> Result<Account, StoreError>;

    fn get(&self, id: AccountId) -> Result<Option<Account>, StoreError>;

    fn find_by_subject(&self, subject: &SubjectId) -> Result<Option<Account>, StoreError>;

    /// Partial update; `Missing` if the id is unknown.
    fn update(&self, id: AccountId, patch: AccountPatch) -> Result<Account, StoreError>;

    /// All accounts in creation order.
    fn list(&self, page: Page) -> Result<Vec<Account>, StoreError>;

    /// Volunteer accounts with `approved = false`, in creation order.
    fn list_pending_volunteers(&self) -> Result<Vec<Account>, StoreError>;
}

pub trait GuardianStore: Send + Sync {
    /// Insert a guardian profile. Unique on `account_id` and on `email`.
    fn insert(&self, new: NewGuardian) -> Result<Guardian, StoreError>;

    fn get(&self, id: GuardianId) -> Result<Option<Guardian>, StoreError>;

    fn find_by_account(&self, account_id: AccountId) -> Result<Option<Guardian>, StoreError>;

    fn find_by_email(&self, email: &str) -> Result<Option<Guardian>, StoreError>;
}

pub trait DependentStore: Send + Sync {
    fn insert(&self, guardian_id: GuardianId, new: NewDependent) -> Result<Dependent, StoreError>;

    fn get(&self, id: DependentId) -> Result<Option<Dependent>, StoreError>;

    /// Partial update; `Missing` if the id is unknown.
    fn update(&self, id: DependentId, patch: DependentPatch) -> Result<Dependent, StoreError>;

    fn list_by_guardian(&self, guardian_id: GuardianId) -> Result<Vec<Dependent>, StoreError>;
}

pub trait OfferingStore: Send + Sync {
    fn insert(
        &self,
        created_by: Option<AccountId>,
        new: NewOffering,
    ) -> Result<Offering, StoreError>;

    fn get(&self, id: OfferingId) -> Result<Option<Offering>, StoreError>;

    /// Partial update; `Missing` if the id is unknown.
    fn update(&self, id: OfferingId, patch: OfferingPatch) -> Result<Offering, StoreError>;

    fn delete(&self, id: OfferingId) -> Result<(), StoreError>;

    fn list(&self, page: Page) -> Result<Vec<Offering>, StoreError>;
}

pub trait EngagementStore: Send + Sync {
    fn insert(
        &self,
        presenter_id: AccountId,
        new: NewEngagement,
    ) -> Result<Engagement, StoreError>;

    fn get(&self, id: EngagementId) -> Result<Option<Engagement>, StoreError>;

    /// Partial update; `Missing` if the id is unknown.
    fn update(&self, id: EngagementId, patch: EngagementPatch) -> Result<Engagement, StoreError>;

    fn delete(&self, id: EngagementId) -> Result<(), StoreError>;

    fn list(&self, page: Page) -> Result<Vec<Engagement>, StoreError>;

    fn list_by_offering(&self, offering_id: OfferingId) -> Result<Vec<Engagement>, StoreError>;

    fn list_by_presenter(&self, presenter_id: AccountId) -> Result<Vec<Engagement>, StoreError>;
}

pub trait VideoStore: Send + Sync {
    fn insert(&self, created_by: AccountId, new: NewVideo) -> Result<Video, StoreError>;

    fn get(&self, id: VideoId) -> Result<Option<Video>, StoreError>;

    /// Partial update; `Missing` if the id is unknown.
    fn update(&self, id: VideoId, patch: VideoPatch) -> Result<Video, StoreError>;

    fn delete(&self, id: VideoId) -> Result<(), StoreError>;

    fn list(&self, page: Page) -> Result<Vec<Video>, StoreError>;

    fn list_by_offering(&self, offering_id: OfferingId) -> Result<Vec<Video>, StoreError>;
}

pub trait EnrollmentStore: Send + Sync {
    /// Insert an enrollment, stamping the current time. Unique on the
    /// (dependent_id, engagement_id) pair.
    fn insert(
        &self,
        dependent_id: DependentId,
        engagement_id: EngagementId,
    ) -> Result<Enrollment, StoreError>;

    fn find(
        &self,
        dependent_id: DependentId,
        engagement_id: EngagementId,
    ) -> Result<Option<Enrollment>, StoreError>;

    fn list_by_dependent(&self, dependent_id: DependentId) -> Result<Vec<Enrollment>, StoreError>;

    fn list_by_engagement(
        &self,
        engagement_id: EngagementId,
    ) -> Result<Vec<Enrollment>, StoreError>;
}
