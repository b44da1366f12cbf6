//! Catalog domain module (offerings, engagements, video links).
//!
//! Offerings are the named topics volunteers teach; engagements are
//! their scheduled instances; videos are external links attached to an
//! offering. Pure domain logic only.

pub mod engagement;
pub mod offering;
pub mod video;

pub use engagement::{Engagement, EngagementPatch, EngagementStatus, NewEngagement};
pub use offering::{NewOffering, Offering, OfferingPatch};
pub use video::{NewVideo, Video, VideoPatch};
