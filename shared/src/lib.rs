//! Shared domain types between the group engine and the dashboard UI

pub mod group;
pub mod lead;
pub mod listing;
pub mod mock;
pub mod record;

pub use group::Group;
pub use lead::{Lead, LeadStatus};
pub use listing::{Listing, ListingStatus};
pub use record::GroupRecord;
