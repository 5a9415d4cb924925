//! Hard-coded sample datasets backing the dashboard tables.
//!
//! There is no backend; the leads and listings tables render these arrays
//! directly, and the group engine computes its "ungrouped" section against
//! them.

use chrono::{TimeZone, Utc};

use crate::lead::{Lead, LeadStatus};
use crate::listing::{Listing, ListingStatus};

pub fn sample_leads() -> Vec<Lead> {
    vec![
        Lead {
            name: "Marta Oliveira".to_string(),
            phone: "555-0101".to_string(),
            email: "marta.oliveira@example.com".to_string(),
            status: LeadStatus::Qualified,
            source: Some("Website".to_string()),
            budget: Some(450_000),
            created_at: Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap(),
        },
        Lead {
            name: "James Whitfield".to_string(),
            phone: "555-0102".to_string(),
            email: "j.whitfield@example.com".to_string(),
            status: LeadStatus::New,
            source: Some("Referral".to_string()),
            budget: Some(320_000),
            created_at: Utc.with_ymd_and_hms(2024, 3, 11, 14, 5, 0).unwrap(),
        },
        Lead {
            name: "Priya Raman".to_string(),
            phone: "555-0103".to_string(),
            email: "priya.raman@example.com".to_string(),
            status: LeadStatus::Contacted,
            source: Some("Open house".to_string()),
            budget: Some(610_000),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 11, 45, 0).unwrap(),
        },
        Lead {
            name: "Diego Fuentes".to_string(),
            phone: "555-0104".to_string(),
            email: "diego.fuentes@example.com".to_string(),
            status: LeadStatus::Negotiation,
            source: Some("Portal".to_string()),
            budget: Some(275_000),
            created_at: Utc.with_ymd_and_hms(2024, 3, 20, 16, 20, 0).unwrap(),
        },
        Lead {
            name: "Helen Zhao".to_string(),
            phone: "555-0105".to_string(),
            email: "helen.zhao@example.com".to_string(),
            status: LeadStatus::New,
            source: None,
            budget: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 22, 10, 0, 0).unwrap(),
        },
        Lead {
            name: "Omar Haddad".to_string(),
            phone: "555-0106".to_string(),
            email: "omar.haddad@example.com".to_string(),
            status: LeadStatus::Closed,
            source: Some("Referral".to_string()),
            budget: Some(520_000),
            created_at: Utc.with_ymd_and_hms(2024, 2, 27, 13, 15, 0).unwrap(),
        },
    ]
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            listing_code: "LS-1042".to_string(),
            address: "18 Alder Court".to_string(),
            city: "Portland".to_string(),
            price: 489_000,
            status: ListingStatus::Active,
            owner_name: Some("R. Calloway".to_string()),
            listed_at: Utc.with_ymd_and_hms(2024, 2, 12, 8, 0, 0).unwrap(),
        },
        Listing {
            listing_code: "LS-1043".to_string(),
            address: "207 Birchwood Lane".to_string(),
            city: "Portland".to_string(),
            price: 615_000,
            status: ListingStatus::Pending,
            owner_name: Some("S. Imani".to_string()),
            listed_at: Utc.with_ymd_and_hms(2024, 2, 19, 8, 0, 0).unwrap(),
        },
        Listing {
            listing_code: "LS-1044".to_string(),
            address: "5 Quayside Walk".to_string(),
            city: "Vancouver".to_string(),
            price: 732_000,
            status: ListingStatus::Active,
            owner_name: None,
            listed_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        },
        Listing {
            listing_code: "LS-1045".to_string(),
            address: "91 Hillcrest Avenue".to_string(),
            city: "Beaverton".to_string(),
            price: 355_000,
            status: ListingStatus::Sold,
            owner_name: Some("T. Nakamura".to_string()),
            listed_at: Utc.with_ymd_and_hms(2024, 1, 30, 8, 0, 0).unwrap(),
        },
        Listing {
            listing_code: "LS-1046".to_string(),
            address: "12 Fenwick Row".to_string(),
            city: "Portland".to_string(),
            price: 528_000,
            status: ListingStatus::Active,
            owner_name: Some("A. Brandt".to_string()),
            listed_at: Utc.with_ymd_and_hms(2024, 3, 8, 8, 0, 0).unwrap(),
        },
    ]
}
