use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use netbill_core::{CustomerId, Money};

/// Customer status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Suspended,
}

/// Contact information for a customer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A subscriber account as the billing layer sees it.
///
/// `opening_balance` is the carried-forward balance from before the records
/// we hold; positive means the customer owes money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub contact: ContactInfo,
    pub status: CustomerStatus,
    pub opening_balance: Money,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: impl Into<String>, opening_balance: Money, created_at: DateTime<Utc>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            contact: ContactInfo::default(),
            status: CustomerStatus::Active,
            opening_balance,
            created_at,
        }
    }

    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }
}
