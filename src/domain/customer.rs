use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Identifiable, NamedEntity, RecordId};

/// A customer who buys on credit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
}

impl Customer {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Identifiable for Customer {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for Customer {
    fn name(&self) -> &str {
        &self.name
    }
}

/// One amount a customer owes, dated the day the credit was taken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub id: RecordId,
    pub customer_id: RecordId,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Debt {
    pub fn new(id: RecordId, customer_id: RecordId, amount: f64, date: NaiveDate) -> Self {
        Self {
            id,
            customer_id,
            amount,
            date,
        }
    }
}

impl Identifiable for Debt {
    fn id(&self) -> RecordId {
        self.id
    }
}
