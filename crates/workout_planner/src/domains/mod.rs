//! Plan assembly, split along the steps of a request.
//!
//! # Modules
//!
//! - [`lookup`]: provider calls and the degrade-to-empty failure policy
//! - [`full_body`]: one exercise per body part across the fixed anatomical groups
//! - [`preferences`]: a small batch of exercises per user preference
//! - [`distribution`]: round-robin placement of exercises onto days

pub mod distribution;
pub mod full_body;
pub mod lookup;
pub mod preferences;

pub use distribution::{distribute_batches, distribute_groups};
pub use full_body::{ANATOMICAL_GROUPS, full_body_groups};
pub use preferences::{PREFERENCE_LIMIT, preference_batches};
