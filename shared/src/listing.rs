use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::GroupRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Pending,
    Sold,
    Withdrawn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub listing_code: String,
    pub address: String,
    pub city: String,
    pub price: u64,

    #[serde(default)]
    pub status: ListingStatus,
    pub owner_name: Option<String>,

    pub listed_at: DateTime<Utc>,
}

impl Listing {
    pub fn new(listing_code: String, address: String, city: String, price: u64) -> Self {
        Self {
            listing_code,
            address,
            city,
            price,
            status: ListingStatus::Active,
            owner_name: None,
            listed_at: Utc::now(),
        }
    }
}

impl GroupRecord for Listing {
    type Key = String;

    const MEMBERS_FIELD: &'static str = "listings";

    fn natural_key(&self) -> Self::Key {
        self.listing_code.clone()
    }
}
