use serde::{Deserialize, Serialize};
use mongodb::bson::{self, oid::ObjectId};
use chrono::{DateTime, Utc};

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BankAccount {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl BankAccount {
    pub fn new(bank_name: String, account_number: String, account_holder: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            bank_name,
            account_number,
            account_holder,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBankAccountRequest {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBankAccountRequest {
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_holder: Option<String>,
    pub is_active: Option<bool>,
}
