use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use skillbridge_auth::{Account, AccountPatch, NewAccount, Role};
use skillbridge_catalog::{
    Engagement, EngagementPatch, EngagementStatus, NewEngagement, NewOffering, NewVideo, Offering,
    OfferingPatch, Video, VideoPatch,
};
use skillbridge_core::{
    AccountId, DependentId, EngagementId, EnrollmentId, GuardianId, OfferingId, SubjectId, VideoId,
};
use skillbridge_enrollment::Enrollment;
use skillbridge_families::{Dependent, DependentPatch, Guardian, NewDependent, NewGuardian};

use crate::contract::{
    AccountStore, DependentStore, EngagementStore, EnrollmentStore, GuardianStore, OfferingStore,
    VideoStore,
};
use crate::{Page, StoreError};

/// In-memory store backing every entity table.
///
/// Intended for tests/dev. Constraint checks run under the write lock,
/// standing in for the relational uniqueness constraints a production
/// deployment gets from its database; insertion order doubles as
/// creation order because identifiers are assigned from one sequence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    seq: u64,
    accounts: BTreeMap<AccountId, Account>,
    guardians: BTreeMap<GuardianId, Guardian>,
    dependents: BTreeMap<DependentId, Dependent>,
    offerings: BTreeMap<OfferingId, Offering>,
    engagements: BTreeMap<EngagementId, Engagement>,
    videos: BTreeMap<VideoId, Video>,
    enrollments: BTreeMap<EnrollmentId, Enrollment>,
}

impl Tables {
    fn next_id(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

fn paginate<T: Clone>(rows: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    rows.skip(page.skip).take(page.limit).collect()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))
    }
}

impl AccountStore for MemoryStore {
    fn insert(&self, new: NewAccount) -> Result<Account, StoreError> {
        let mut tables = self.write()?;
        if tables.accounts.values().any(|a| a.subject == new.subject) {
            return Err(StoreError::Duplicate("accounts.subject"));
        }

        let id = AccountId::new(tables.next_id());
        let account = Account {
            id,
            subject: new.subject,
            role: new.role,
            approved: new.approved,
            created_at: Utc::now(),
        };
        tables.accounts.insert(id, account.clone());
        Ok(account)
    }

    fn get(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.read()?.accounts.get(&id).cloned())
    }

    fn find_by_subject(&self, subject: &SubjectId) -> Result<Option<Account>, StoreError> {
        Ok(self
            .read()?
            .accounts
            .values()
            .find(|a| a.subject == *subject)
            .cloned())
    }

    fn update(&self, id: AccountId, patch: AccountPatch) -> Result<Account, StoreError> {
        let mut tables = self.write()?;
        let account = tables.accounts.get_mut(&id).ok_or(StoreError::Missing)?;
        account.apply(patch);
        Ok(account.clone())
    }

    fn list(&self, page: Page) -> Result<Vec<Account>, StoreError> {
        Ok(paginate(self.read()?.accounts.values().cloned(), page))
    }

    fn list_pending_volunteers(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self
            .read()?
            .accounts
            .values()
            .filter(|a| a.role == Role::Volunteer && !a.approved)
            .cloned()
            .collect())
    }
}

impl GuardianStore for MemoryStore {
    fn insert(&self, new: NewGuardian) -> Result<Guardian, StoreError> {
        let mut tables = self.write()?;
        if tables
            .guardians
            .values()
            .any(|g| g.account_id == new.account_id)
        {
            return Err(StoreError::Duplicate("guardians.account_id"));
        }
        if tables.guardians.values().any(|g| g.email == new.email) {
            return Err(StoreError::Duplicate("guardians.email"));
        }

        let id = GuardianId::new(tables.next_id());
        let guardian = Guardian {
            id,
            account_id: new.account_id,
            email: new.email,
            created_at: Utc::now(),
        };
        tables.guardians.insert(id, guardian.clone());
        Ok(guardian)
    }

    fn get(&self, id: GuardianId) -> Result<Option<Guardian>, StoreError> {
        Ok(self.read()?.guardians.get(&id).cloned())
    }

    fn find_by_account(&self, account_id: AccountId) -> Result<Option<Guardian>, StoreError> {
        Ok(self
            .read()?
            .guardians
            .values()
            .find(|g| g.account_id == account_id)
            .cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Guardian>, StoreError> {
        Ok(self
            .read()?
            .guardians
            .values()
            .find(|g| g.email == email)
            .cloned())
    }
}

impl DependentStore for MemoryStore {
    fn insert(&self, guardian_id: GuardianId, new: NewDependent) -> Result<Dependent, StoreError> {
        let mut tables = self.write()?;
        let id = DependentId::new(tables.next_id());
        let dependent = Dependent {
            id,
            guardian_id,
            name: new.name,
            age: new.age,
            interests: new.interests,
            created_at: Utc::now(),
        };
        tables.dependents.insert(id, dependent.clone());
        Ok(dependent)
    }

    fn get(&self, id: DependentId) -> Result<Option<Dependent>, StoreError> {
        Ok(self.read()?.dependents.get(&id).cloned())
    }

    fn update(&self, id: DependentId, patch: DependentPatch) -> Result<Dependent, StoreError> {
        let mut tables = self.write()?;
        let dependent = tables.dependents.get_mut(&id).ok_or(StoreError::Missing)?;
        dependent.apply(patch);
        Ok(dependent.clone())
    }

    fn list_by_guardian(&self, guardian_id: GuardianId) -> Result<Vec<Dependent>, StoreError> {
        Ok(self
            .read()?
            .dependents
            .values()
            .filter(|d| d.guardian_id == guardian_id)
            .cloned()
            .collect())
    }
}

impl OfferingStore for MemoryStore {
    fn insert(
        &self,
        created_by: Option<AccountId>,
        new: NewOffering,
    ) -> Result<Offering, StoreError> {
        let mut tables = self.write()?;
        let id = OfferingId::new(tables.next_id());
        let offering = Offering {
            id,
            name: new.name,
            description: new.description,
            created_by,
            created_at: Utc::now(),
        };
        tables.offerings.insert(id, offering.clone());
        Ok(offering)
    }

    fn get(&self, id: OfferingId) -> Result<Option<Offering>, StoreError> {
        Ok(self.read()?.offerings.get(&id).cloned())
    }

    fn update(&self, id: OfferingId, patch: OfferingPatch) -> Result<Offering, StoreError> {
        let mut tables = self.write()?;
        let offering = tables.offerings.get_mut(&id).ok_or(StoreError::Missing)?;
        offering.apply(patch);
        Ok(offering.clone())
    }

    fn delete(&self, id: OfferingId) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        tables.offerings.remove(&id).ok_or(StoreError::Missing)?;
        Ok(())
    }

    fn list(&self, page: Page) -> Result<Vec<Offering>, StoreError> {
        Ok(paginate(self.read()?.offerings.values().cloned(), page))
    }
}

impl EngagementStore for MemoryStore {
    fn insert(
        &self,
        presenter_id: AccountId,
        new: NewEngagement,
    ) -> Result<Engagement, StoreError> {
        let mut tables = self.write()?;
        let id = EngagementId::new(tables.next_id());
        let engagement = Engagement {
            id,
            offering_id: new.offering_id,
            presenter_id,
            title: new.title,
            description: new.description,
            schedule: new.schedule,
            meeting_link: new.meeting_link,
            status: EngagementStatus::Scheduled,
            created_at: Utc::now(),
        };
        tables.engagements.insert(id, engagement.clone());
        Ok(engagement)
    }

    fn get(&self, id: EngagementId) -> Result<Option<Engagement>, StoreError> {
        Ok(self.read()?.engagements.get(&id).cloned())
    }

    fn update(&self, id: EngagementId, patch: EngagementPatch) -> Result<Engagement, StoreError> {
        let mut tables = self.write()?;
        let engagement = tables.engagements.get_mut(&id).ok_or(StoreError::Missing)?;
        engagement.apply(patch);
        Ok(engagement.clone())
    }

    fn delete(&self, id: EngagementId) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        tables.engagements.remove(&id).ok_or(StoreError::Missing)?;
        Ok(())
    }

    fn list(&self, page: Page) -> Result<Vec<Engagement>, StoreError> {
        Ok(paginate(self.read()?.engagements.values().cloned(), page))
    }

    fn list_by_offering(&self, offering_id: OfferingId) -> Result<Vec<Engagement>, StoreError> {
        Ok(self
            .read()?
            .engagements
            .values()
            .filter(|e| e.offering_id == offering_id)
            .cloned()
            .collect())
    }

    fn list_by_presenter(&self, presenter_id: AccountId) -> Result<Vec<Engagement>, StoreError> {
        Ok(self
            .read()?
            .engagements
            .values()
            .filter(|e| e.presenter_id == presenter_id)
            .cloned()
            .collect())
    }
}

impl VideoStore for MemoryStore {
    fn insert(&self, created_by: AccountId, new: NewVideo) -> Result<Video, StoreError> {
        let mut tables = self.write()?;
        let id = VideoId::new(tables.next_id());
        let video = Video {
            id,
            offering_id: new.offering_id,
            title: new.title,
            url: new.url,
            created_by,
            created_at: Utc::now(),
        };
        tables.videos.insert(id, video.clone());
        Ok(video)
    }

    fn get(&self, id: VideoId) -> Result<Option<Video>, StoreError> {
        Ok(self.read()?.videos.get(&id).cloned())
    }

    fn update(&self, id: VideoId, patch: VideoPatch) -> Result<Video, StoreError> {
        let mut tables = self.write()?;
        let video = tables.videos.get_mut(&id).ok_or(StoreError::Missing)?;
        video.apply(patch);
        Ok(video.clone())
    }

    fn delete(&self, id: VideoId) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        tables.videos.remove(&id).ok_or(StoreError::Missing)?;
        Ok(())
    }

    fn list(&self, page: Page) -> Result<Vec<Video>, StoreError> {
        Ok(paginate(self.read()?.videos.values().cloned(), page))
    }

    fn list_by_offering(&self, offering_id: OfferingId) -> Result<Vec<Video>, StoreError> {
        Ok(self
            .read()?
            .videos
            .values()
            .filter(|v| v.offering_id == offering_id)
            .cloned()
            .collect())
    }
}

impl EnrollmentStore for MemoryStore {
    fn insert(
        &self,
        dependent_id: DependentId,
        engagement_id: EngagementId,
    ) -> Result<Enrollment, StoreError> {
        let mut tables = self.write()?;
        // The pair constraint is checked under the write lock so two
        // concurrent enrolls cannot both pass.
        if tables
            .enrollments
            .values()
            .any(|e| e.dependent_id == dependent_id && e.engagement_id == engagement_id)
        {
            return Err(StoreError::Duplicate(
                "enrollments.dependent_id_engagement_id",
            ));
        }

        let id = EnrollmentId::new(tables.next_id());
        let enrollment = Enrollment {
            id,
            dependent_id,
            engagement_id,
            enrolled_at: Utc::now(),
        };
        tables.enrollments.insert(id, enrollment.clone());
        Ok(enrollment)
    }

    fn find(
        &self,
        dependent_id: DependentId,
        engagement_id: EngagementId,
    ) -> Result<Option<Enrollment>, StoreError> {
        Ok(self
            .read()?
            .enrollments
            .values()
            .find(|e| e.dependent_id == dependent_id && e.engagement_id == engagement_id)
            .cloned())
    }

    fn list_by_dependent(&self, dependent_id: DependentId) -> Result<Vec<Enrollment>, StoreError> {
        Ok(self
            .read()?
            .enrollments
            .values()
            .filter(|e| e.dependent_id == dependent_id)
            .cloned()
            .collect())
    }

    fn list_by_engagement(
        &self,
        engagement_id: EngagementId,
    ) -> Result<Vec<Enrollment>, StoreError> {
        Ok(self
            .read()?
            .enrollments
            .values()
            .filter(|e| e.engagement_id == engagement_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use skillbridge_core::SubjectId;

    use super::*;

    fn account(store: &MemoryStore, subject: &str, role: Role) -> Account {
        AccountStore::insert(store, NewAccount::for_role(SubjectId::new(subject), role)).unwrap()
    }

    #[test]
    fn account_subject_is_unique() {
        let store = MemoryStore::new();
        account(&store, "sub_1", Role::Volunteer);

        let err = AccountStore::insert(
            &store,
            NewAccount::for_role(SubjectId::new("sub_1"), Role::Guardian),
        )
        .unwrap_err();
        assert_eq!(err, StoreError::Duplicate("accounts.subject"));
    }

    #[test]
    fn guardian_account_and_email_are_unique() {
        let store = MemoryStore::new();
        let a = account(&store, "sub_1", Role::Guardian);
        let b = account(&store, "sub_2", Role::Guardian);

        GuardianStore::insert(&store, NewGuardian::new(a.id, "a@x.com")).unwrap();

        let err =
            GuardianStore::insert(&store, NewGuardian::new(a.id, "other@x.com")).unwrap_err();
        assert_eq!(err, StoreError::Duplicate("guardians.account_id"));

        let err = GuardianStore::insert(&store, NewGuardian::new(b.id, "a@x.com")).unwrap_err();
        assert_eq!(err, StoreError::Duplicate("guardians.email"));
    }

    #[test]
    fn enrollment_pair_is_unique() {
        let store = MemoryStore::new();
        let dependent = DependentId::new(11);
        let engagement = EngagementId::new(12);

        EnrollmentStore::insert(&store, dependent, engagement).unwrap();
        let err = EnrollmentStore::insert(&store, dependent, engagement).unwrap_err();
        assert_eq!(
            err,
            StoreError::Duplicate("enrollments.dependent_id_engagement_id")
        );

        // Same dependent, different engagement is fine.
        EnrollmentStore::insert(&store, dependent, EngagementId::new(13)).unwrap();
        assert_eq!(
            EnrollmentStore::list_by_dependent(&store, dependent)
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn pending_volunteers_come_back_in_creation_order() {
        let store = MemoryStore::new();
        let v1 = account(&store, "sub_1", Role::Volunteer);
        account(&store, "sub_2", Role::Guardian);
        let v2 = account(&store, "sub_3", Role::Volunteer);

        let pending = store.list_pending_volunteers().unwrap();
        assert_eq!(
            pending.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![v1.id, v2.id]
        );

        AccountStore::update(&store, v1.id, AccountPatch::approve()).unwrap();
        let pending = store.list_pending_volunteers().unwrap();
        assert_eq!(
            pending.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![v2.id]
        );
    }

    #[test]
    fn account_update_of_unknown_id_is_missing() {
        let store = MemoryStore::new();
        let err = AccountStore::update(&store, AccountId::new(99), AccountPatch::approve())
            .unwrap_err();
        assert_eq!(err, StoreError::Missing);
    }

    #[test]
    fn list_pagination_skips_and_limits() {
        let store = MemoryStore::new();
        for i in 0..5 {
            OfferingStore::insert(
                &store,
                None,
                NewOffering {
                    name: format!("offering-{i}"),
                    description: None,
                },
            )
            .unwrap();
        }

        let page = OfferingStore::list(&store, Page::new(1, 2)).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "offering-1");
        assert_eq!(page[1].name, "offering-2");

        let tail = OfferingStore::list(&store, Page::new(4, 10)).unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].name, "offering-4");
    }

    #[test]
    fn engagement_delete_removes_the_row() {
        let store = MemoryStore::new();
        let presenter = account(&store, "sub_1", Role::Volunteer);
        let offering = OfferingStore::insert(
            &store,
            Some(presenter.id),
            NewOffering {
                name: "Chess".to_string(),
                description: None,
            },
        )
        .unwrap();
        let engagement = EngagementStore::insert(
            &store,
            presenter.id,
            NewEngagement {
                offering_id: offering.id,
                title: "Chess 101".to_string(),
                description: None,
                schedule: Utc::now(),
                meeting_link: None,
            },
        )
        .unwrap();

        EngagementStore::delete(&store, engagement.id).unwrap();
        assert!(EngagementStore::get(&store, engagement.id)
            .unwrap()
            .is_none());
        assert_eq!(
            EngagementStore::delete(&store, engagement.id).unwrap_err(),
            StoreError::Missing
        );
    }
}
