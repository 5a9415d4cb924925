use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::GroupRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Negotiation,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub email: String,

    #[serde(default)]
    pub status: LeadStatus,
    pub source: Option<String>,
    pub budget: Option<u64>,

    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Self {
            name,
            phone,
            email,
            status: LeadStatus::New,
            source: None,
            budget: None,
            created_at: Utc::now(),
        }
    }
}

impl GroupRecord for Lead {
    // No stable id in the source data; phone+email is the natural key.
    type Key = (String, String);

    const MEMBERS_FIELD: &'static str = "leads";

    fn natural_key(&self) -> Self::Key {
        (self.phone.clone(), self.email.clone())
    }
}
