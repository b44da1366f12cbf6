use std::sync::Arc;

use skillbridge_auth::{Account, Role};
use skillbridge_core::SubjectId;
use skillbridge_services::{
    AccountService, DependentService, EngagementService, EnrollmentService, GuardianService,
    OfferingService, VideoService,
};
use skillbridge_store::MemoryStore;

/// All services wired over one shared in-memory store.
pub struct TestPlatform {
    pub accounts: AccountService,
    pub guardians: GuardianService,
    pub dependents: DependentService,
    pub offerings: OfferingService,
    pub engagements: EngagementService,
    pub videos: VideoService,
    pub enrollments: EnrollmentService,
}

pub fn platform() -> TestPlatform {
    skillbridge_observability::init();

    let store = Arc::new(MemoryStore::new());
    TestPlatform {
        accounts: AccountService::new(store.clone()),
        guardians: GuardianService::new(store.clone()),
        dependents: DependentService::new(store.clone(), store.clone()),
        offerings: OfferingService::new(store.clone()),
        engagements: EngagementService::new(store.clone(), store.clone()),
        videos: VideoService::new(store.clone(), store.clone()),
        enrollments: EnrollmentService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        ),
    }
}

pub fn register(platform: &TestPlatform, subject: &str, role: Role) -> Account {
    platform
        .accounts
        .register(SubjectId::new(subject), role)
        .unwrap()
}

/// Register a volunteer and run it through admin approval.
pub fn approved_volunteer(platform: &TestPlatform, subject: &str, admin: &Account) -> Account {
    let volunteer = register(platform, subject, Role::Volunteer);
    platform.accounts.approve(admin, volunteer.id).unwrap()
}
