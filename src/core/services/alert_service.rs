//! Buckets suppliers by how urgently their invoices fall due.

use chrono::{Duration, NaiveDate};

use crate::domain::common::RecordId;
use crate::domain::ledger::Ledger;

use super::BalanceService;

/// A supplier surfaced on the dashboard, carrying its total outstanding
/// balance (not a per-invoice amount).
#[derive(Debug, Clone, PartialEq)]
pub struct DueAlert {
    pub supplier_id: RecordId,
    pub name: String,
    pub balance: f64,
}

/// The three dashboard buckets, each in supplier iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DueAlerts {
    pub overdue: Vec<DueAlert>,
    pub due_soon: Vec<DueAlert>,
    pub due_later: Vec<DueAlert>,
}

pub struct AlertService;

impl AlertService {
    /// Partitions suppliers with a positive outstanding balance into at most
    /// one bucket: overdue, due within 0-3 days, or due within 4-7 days.
    ///
    /// `today` is caller-supplied (midnight-normalized by construction of
    /// `NaiveDate`) rather than read from the wall clock. Priority is
    /// first-match: one overdue invoice puts the supplier in the overdue
    /// bucket no matter what else is outstanding. Invoices without a due
    /// date never flag; a supplier whose invoices all fall outside the
    /// windows appears nowhere.
    pub fn classify(ledger: &Ledger, today: NaiveDate) -> DueAlerts {
        let soon_end = today + Duration::days(3);
        let later_end = today + Duration::days(7);
        let mut alerts = DueAlerts::default();

        for supplier in &ledger.suppliers {
            let balance =
                BalanceService::supplier_balance(supplier.id, &ledger.invoices, &ledger.payments);
            if balance <= 0.0 {
                continue;
            }

            let mut overdue = false;
            let mut due_soon = false;
            let mut due_later = false;
            for invoice in ledger.invoices_of(supplier.id) {
                let due = match invoice.due_date {
                    Some(due) => due,
                    None => continue,
                };
                if due < today {
                    overdue = true;
                } else if due <= soon_end {
                    due_soon = true;
                } else if due <= later_end {
                    due_later = true;
                }
            }

            let alert = DueAlert {
                supplier_id: supplier.id,
                name: supplier.name.clone(),
                balance,
            };
            if overdue {
                alerts.overdue.push(alert);
            } else if due_soon {
                alerts.due_soon.push(alert);
            } else if due_later {
                alerts.due_later.push(alert);
            }
        }
        alerts
    }
}
