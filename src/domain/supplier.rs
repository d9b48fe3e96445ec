use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Identifiable, NamedEntity, RecordId};

/// A supplier the store owes money to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
}

impl Supplier {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Identifiable for Supplier {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for Supplier {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A supplier invoice. `rejection` reduces the effective amount owed, e.g.
/// goods returned to the supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: RecordId,
    pub supplier_id: RecordId,
    pub issue_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub number: String,
    pub amount: f64,
    #[serde(default)]
    pub rejection: f64,
}

impl Invoice {
    pub fn new(
        id: RecordId,
        supplier_id: RecordId,
        issue_date: NaiveDate,
        due_date: Option<NaiveDate>,
        number: impl Into<String>,
        amount: f64,
        rejection: f64,
    ) -> Self {
        Self {
            id,
            supplier_id,
            issue_date,
            due_date,
            number: number.into(),
            amount,
            rejection,
        }
    }

    /// Default due date offered at entry time: seven days after issue.
    pub fn default_due_date(issue_date: NaiveDate) -> NaiveDate {
        issue_date + Duration::days(7)
    }

    /// Amount still attributable to this invoice after rejections.
    pub fn net_amount(&self) -> f64 {
        self.amount - self.rejection
    }
}

impl Identifiable for Invoice {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A payment made towards a supplier's outstanding balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: RecordId,
    pub supplier_id: RecordId,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Payment {
    pub fn new(id: RecordId, supplier_id: RecordId, amount: f64, date: NaiveDate) -> Self {
        Self {
            id,
            supplier_id,
            amount,
            date,
        }
    }
}

impl Identifiable for Payment {
    fn id(&self) -> RecordId {
        self.id
    }
}
