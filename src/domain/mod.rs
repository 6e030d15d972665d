//! Domain logic - pure release rules independent of tools and terminals

pub mod choice;
pub mod tag;
pub mod version;

pub use choice::BumpChoice;
pub use tag::{tag_message, TagPattern};
pub use version::{BumpCandidates, SemanticVersion, VersionBump};
