//! Persistence-store boundary.
//!
//! One trait per entity describes the store collaborator this core
//! consumes: create, get-by-id, filtered list with pagination, partial
//! update, delete, plus the uniqueness constraints the services rely
//! on. [`MemoryStore`] implements every trait for tests/dev.

pub mod contract;
pub mod error;
pub mod memory;
pub mod page;

pub use contract::{
    AccountStore, DependentStore, EngagementStore, EnrollmentStore, GuardianStore, OfferingStore,
    VideoStore,
};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use page::Page;
