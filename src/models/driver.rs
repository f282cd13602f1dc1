use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub tax_id: String,
    pub salary: f64,
    pub routes_completed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment: Option<NaiveDate>,
}
