use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub code: String,
    pub has_atm: bool,
    pub employees: u32,
    pub email: String,
    pub tax_info: String,
    pub city: String,
    pub zip_code: String,
    pub business_type: String,
    pub country: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub last_login: NaiveDateTime,
}
