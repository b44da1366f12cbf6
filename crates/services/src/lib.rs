//! `skillbridge-services` — the operation surface of the platform core.
//!
//! One service per bounded concern, each holding explicit store handles
//! (dependency injection via constructor, no ambient state). Every
//! mutating operation runs the same chain: resolve the actor, ask the
//! access policy, then touch the target store.

pub mod accounts;
pub mod engagements;
pub mod enrollments;
pub mod families;
pub mod offerings;
pub mod videos;

pub use accounts::AccountService;
pub use engagements::EngagementService;
pub use enrollments::EnrollmentService;
pub use families::{DependentService, GuardianService};
pub use offerings::OfferingService;
pub use videos::VideoService;
