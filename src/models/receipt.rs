use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded purchase against a trip's food budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,

    pub store: String,

    pub date: NaiveDate,

    pub amount: f64,

    #[serde(default)]
    pub notes: Option<String>,
}

impl Receipt {
    pub fn new(store: &str, date: NaiveDate, amount: f64, notes: Option<String>) -> Self {
        Self {
            id: String::new(),
            store: store.to_string(),
            date,
            amount,
            notes,
        }
    }
}
